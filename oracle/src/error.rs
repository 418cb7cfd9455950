//! Oracle error types.

use alloy_primitives::Address;
use crossquote_common::{AssetId, Pair, PriceError};
use thiserror::Error;

/// Errors surfaced to callers of the quote engine.
///
/// Every kind is terminal for the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The base asset cannot be resolved or is not priced by any feed.
    #[error("Base asset unsupported: {0}")]
    BaseUnsupported(AssetId),

    /// The quote asset cannot be resolved or is not priced by any feed.
    #[error("Quote asset unsupported: {0}")]
    QuoteUnsupported(AssetId),

    /// Both assets are supported but no usable leg sequence connects them.
    #[error("No path from {base} to {quote}")]
    NoPath { base: AssetId, quote: AssetId },

    /// A conversion or scaling step left the representable range.
    #[error("Arithmetic overflow")]
    Overflow,
}

impl OracleError {
    /// Get error code for callers and logs.
    pub fn code(&self) -> &'static str {
        match self {
            OracleError::BaseUnsupported(_) => "BASE_UNSUPPORTED",
            OracleError::QuoteUnsupported(_) => "QUOTE_UNSUPPORTED",
            OracleError::NoPath { .. } => "NO_PATH",
            OracleError::Overflow => "OVERFLOW",
        }
    }
}

/// Errors reported by direct feed providers.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    /// Price not available for the requested pair.
    #[error("Price not available for {0}")]
    PriceNotAvailable(Pair),

    /// Price has expired and is no longer valid.
    #[error("Price expired for {0}")]
    PriceExpired(Pair),

    /// Provider returned an unusable price.
    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    /// Provider returned an error.
    #[error("Feed provider error: {0}")]
    ProviderError(String),
}

/// Errors reported by asset metadata providers.
#[derive(Debug, Clone, Error)]
pub enum MetadataError {
    /// The token has no known metadata.
    #[error("Unknown asset: {0}")]
    UnknownAsset(Address),

    /// Provider returned an error.
    #[error("Metadata provider error: {0}")]
    ProviderError(String),
}

/// Result type for engine operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
