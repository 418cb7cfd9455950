//! CrossQuote Common Types
//!
//! Shared types used across the CrossQuote oracle: asset identifiers
//! (token addresses and synthetic ISO-4217 fiat codes), currency pairs and
//! the two-sided prices reported by direct feeds.

pub mod identifiers;
pub mod monetary;
pub mod error;

pub use identifiers::*;
pub use monetary::*;
pub use error::*;
