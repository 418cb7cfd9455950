//! Pair and feed price types.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PriceError;
use crate::AssetId;

/// An ordered (base, quote) pair.
///
/// Price is expressed as units of quote per one unit of base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Base asset (being priced).
    pub base: AssetId,
    /// Quote asset (pricing asset).
    pub quote: AssetId,
}

impl Pair {
    /// Create a new pair.
    pub fn new(base: AssetId, quote: AssetId) -> Self {
        Self { base, quote }
    }

    /// Get the inverse pair.
    pub fn inverse(&self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
        }
    }

    /// Whether base and quote are the same asset.
    pub fn is_identity(&self) -> bool {
        self.base == self.quote
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// A two-sided price reported by a direct feed for one stored pair.
///
/// `bid` and `ask` are whole quote units per whole base unit; decimals of
/// the underlying assets are not applied here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPrice {
    /// The pair as stored by the feed.
    pub pair: Pair,
    /// Bid price.
    pub bid: Decimal,
    /// Ask price.
    pub ask: Decimal,
    /// When this price was quoted.
    pub quoted_at: DateTime<Utc>,
    /// When this price expires.
    pub valid_until: DateTime<Utc>,
    /// Price source.
    pub source: String,
}

impl FeedPrice {
    /// Create a new two-sided price.
    pub fn new(
        pair: Pair,
        bid: Decimal,
        ask: Decimal,
        valid_for_seconds: i64,
        source: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            pair,
            bid,
            ask,
            quoted_at: now,
            valid_until: now + Duration::seconds(valid_for_seconds),
            source: source.into(),
        }
    }

    /// Create a price from a feed that reports a single value.
    pub fn single(
        pair: Pair,
        price: Decimal,
        valid_for_seconds: i64,
        source: impl Into<String>,
    ) -> Self {
        Self::new(pair, price, price, valid_for_seconds, source)
    }

    /// Mid-market price. Never overflows, whatever the reported prices.
    pub fn mid(&self) -> Decimal {
        let (low, high) = if self.bid <= self.ask {
            (self.bid, self.ask)
        } else {
            (self.ask, self.bid)
        };
        match high.checked_sub(low) {
            Some(width) => low + width / Decimal::TWO,
            // Opposite signs: the halves cannot overflow when summed.
            None => self.bid / Decimal::TWO + self.ask / Decimal::TWO,
        }
    }

    /// Check if the price is still valid.
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.valid_until
    }

    /// Get the spread in basis points.
    ///
    /// `None` when the mid is zero or the ratio is not representable.
    pub fn spread_bps(&self) -> Option<Decimal> {
        let mid = self.mid();
        if mid.is_zero() {
            return None;
        }
        self.ask
            .checked_sub(self.bid)?
            .checked_div(mid)?
            .checked_mul(Decimal::from(10000))
    }

    /// Check that the price can be used for conversion.
    pub fn validate(&self) -> Result<(), PriceError> {
        if self.bid <= Decimal::ZERO || self.ask <= Decimal::ZERO {
            return Err(PriceError::NonPositive {
                pair: self.pair,
                bid: self.bid,
                ask: self.ask,
            });
        }
        if self.bid > self.ask {
            return Err(PriceError::Crossed {
                pair: self.pair,
                bid: self.bid,
                ask: self.ask,
            });
        }
        Ok(())
    }
}
