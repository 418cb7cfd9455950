//! Error types for shared CrossQuote values.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::Pair;

/// Failure to parse an asset identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetParseError {
    /// Not an address, a known alphabetic code, or a numeric code.
    #[error("Invalid asset identifier: {0}")]
    Invalid(String),

    /// Numeric code outside the reserved synthetic fiat range.
    #[error("ISO-4217 code {0} is outside the synthetic range 1..=999")]
    CodeOutOfRange(u32),
}

/// A feed price that cannot be used for conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Bid or ask is zero or negative.
    #[error("Non-positive price for {pair}: bid {bid}, ask {ask}")]
    NonPositive {
        pair: Pair,
        bid: Decimal,
        ask: Decimal,
    },

    /// Bid is above ask.
    #[error("Crossed price for {pair}: bid {bid} > ask {ask}")]
    Crossed {
        pair: Pair,
        bid: Decimal,
        ask: Decimal,
    },
}

impl PriceError {
    /// Get error code for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            PriceError::NonPositive { .. } => "NON_POSITIVE_PRICE",
            PriceError::Crossed { .. } => "CROSSED_PRICE",
        }
    }
}
