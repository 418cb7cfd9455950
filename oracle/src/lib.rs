//! CrossQuote Oracle
//!
//! Quote resolution and composition engine: converts an amount of a base
//! asset into a quote asset, returning a two-sided (bid/ask) quote and a
//! one-sided midpoint, composing cross prices through anchor assets when no
//! direct feed exists.
//!
//! # Features
//!
//! - Synthetic ISO-4217 fiat assets at a fixed 18 decimals
//! - Bounded, deterministic cross-path search through prioritised anchors
//! - Bid rounded down and ask rounded up at every leg
//! - Geometric or arithmetic midpoint
//! - In-memory and TTL-cached feed collaborators
//!
//! # Example
//!
//! ```rust,ignore
//! use crossquote_oracle::{CrossOracle, OracleConfig, StaticFeedProvider, StaticMetadata};
//! use crossquote_common::AssetId;
//!
//! let oracle = CrossOracle::new(feeds, metadata, OracleConfig::default());
//!
//! let quotes = oracle.get_quotes(amount, AssetId::eur(), AssetId::usd()).await?;
//! let mid = oracle.get_quote(amount, AssetId::eur(), AssetId::usd()).await?;
//! ```

pub mod engine;
pub mod provider;
pub mod cache;
pub mod config;
pub mod conversion;
pub mod compose;
pub mod decimals;
pub mod path;
pub mod math;
pub mod error;

pub use engine::CrossOracle;
pub use provider::{FeedProvider, StaticFeedProvider};
pub use cache::{CachedFeedProvider, FeedCacheConfig};
pub use config::{MidpointStrategy, OracleConfig, SpreadPolicy};
pub use conversion::TwoSidedAmount;
pub use decimals::{DecimalNormalizer, MetadataProvider, StaticMetadata};
pub use path::{Direction, Leg, LegGraph, Path};
pub use error::{FeedError, MetadataError, OracleError, OracleResult};
