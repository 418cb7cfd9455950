//! Feed price caching with TTL support.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use crossquote_common::{FeedPrice, Pair};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::FeedResult;
use crate::provider::FeedProvider;

/// Cached price entry.
#[derive(Debug, Clone)]
struct CacheEntry {
    price: FeedPrice,
    cached_at: DateTime<Utc>,
    ttl: Duration,
}

impl CacheEntry {
    fn new(price: FeedPrice, ttl: Duration) -> Self {
        Self {
            price,
            cached_at: Utc::now(),
            ttl,
        }
    }

    fn is_valid(&self) -> bool {
        let age = Utc::now().signed_duration_since(self.cached_at);

        // Valid if within TTL and the price itself hasn't expired
        age < self.ttl && self.price.is_valid()
    }
}

/// Configuration for the feed cache.
#[derive(Debug, Clone)]
pub struct FeedCacheConfig {
    /// TTL for cached prices.
    pub ttl: Duration,
    /// Maximum number of entries.
    pub max_entries: usize,
}

impl Default for FeedCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::milliseconds(100),
            max_entries: 10000,
        }
    }
}

/// A feed provider that caches another provider's prices.
pub struct CachedFeedProvider {
    inner: Arc<dyn FeedProvider>,
    cache: DashMap<Pair, CacheEntry>,
    config: FeedCacheConfig,
}

impl CachedFeedProvider {
    /// Wrap a provider with the default cache configuration.
    pub fn new(inner: Arc<dyn FeedProvider>) -> Self {
        Self::with_config(inner, FeedCacheConfig::default())
    }

    /// Wrap a provider with a custom cache configuration.
    pub fn with_config(inner: Arc<dyn FeedProvider>, config: FeedCacheConfig) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
            config,
        }
    }

    fn cached(&self, pair: &Pair) -> Option<FeedPrice> {
        if let Some(entry) = self.cache.get(pair) {
            if entry.is_valid() {
                debug!(pair = %pair, "Cache hit");
                return Some(entry.price.clone());
            }
            debug!(pair = %pair, "Cache entry expired");
            drop(entry);
            self.cache.remove(pair);
        }

        debug!(pair = %pair, "Cache miss");
        None
    }

    fn insert(&self, price: FeedPrice) {
        if self.cache.len() >= self.config.max_entries {
            self.evict_expired();
        }
        self.cache
            .insert(price.pair, CacheEntry::new(price, self.config.ttl));
    }

    /// Drop a cached pair.
    pub fn invalidate(&self, pair: &Pair) {
        self.cache.remove(pair);
    }

    /// Clear all cached prices.
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Get the number of entries in cache.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Evict expired entries.
    pub fn evict_expired(&self) {
        self.cache.retain(|_, entry| entry.is_valid());
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        let total = self.cache.len();
        let valid = self.cache.iter().filter(|e| e.is_valid()).count();

        CacheStats {
            total_entries: total,
            valid_entries: valid,
            expired_entries: total - valid,
        }
    }
}

#[async_trait]
impl FeedProvider for CachedFeedProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn get_price(&self, pair: &Pair) -> FeedResult<FeedPrice> {
        if let Some(price) = self.cached(pair) {
            return Ok(price);
        }

        let price = self.inner.get_price(pair).await?;
        self.insert(price.clone());
        Ok(price)
    }

    fn supports_pair(&self, pair: &Pair) -> bool {
        self.inner.supports_pair(pair)
    }

    fn supported_pairs(&self) -> Vec<Pair> {
        self.inner.supported_pairs()
    }
}

/// Cache statistics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
}
