//! Direct feed provider traits and implementations.

use async_trait::async_trait;
use crossquote_common::{FeedPrice, Pair};
use dashmap::DashMap;

use crate::error::{FeedError, FeedResult};

/// Trait for direct feed providers.
#[async_trait]
pub trait FeedProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Get the two-sided price for a pair, in the orientation it is stored.
    async fn get_price(&self, pair: &Pair) -> FeedResult<FeedPrice>;

    /// Check if this provider prices the given pair directly.
    fn supports_pair(&self, pair: &Pair) -> bool;

    /// Get all directly priced pairs.
    fn supported_pairs(&self) -> Vec<Pair>;
}

/// In-memory feed table.
pub struct StaticFeedProvider {
    name: String,
    prices: DashMap<Pair, FeedPrice>,
}

impl StaticFeedProvider {
    /// Create an empty provider.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prices: DashMap::new(),
        }
    }

    /// Set or replace the price for its pair.
    pub fn set_price(&self, price: FeedPrice) {
        self.prices.insert(price.pair, price);
    }

    /// Stop pricing a pair.
    pub fn remove_price(&self, pair: &Pair) {
        self.prices.remove(pair);
    }
}

#[async_trait]
impl FeedProvider for StaticFeedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_price(&self, pair: &Pair) -> FeedResult<FeedPrice> {
        self.prices
            .get(pair)
            .map(|p| p.clone())
            .ok_or(FeedError::PriceNotAvailable(*pair))
    }

    fn supports_pair(&self, pair: &Pair) -> bool {
        self.prices.contains_key(pair)
    }

    fn supported_pairs(&self) -> Vec<Pair> {
        let mut pairs: Vec<Pair> = self.prices.iter().map(|p| *p.key()).collect();
        pairs.sort();
        pairs
    }
}
