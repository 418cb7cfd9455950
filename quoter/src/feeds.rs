//! Feed table files.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use crossquote_common::{AssetId, FeedPrice, Pair};
use crossquote_oracle::{OracleConfig, StaticFeedProvider, StaticMetadata};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Seconds a loaded price stays valid when the entry does not say.
const DEFAULT_VALID_FOR_SECONDS: i64 = 3600;

/// A feed table: engine configuration, token decimals and direct prices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedFile {
    /// Engine configuration. Falls back to the environment when absent.
    #[serde(default)]
    pub config: Option<OracleConfig>,
    /// Token decimals. Synthetic currencies need no entry.
    #[serde(default)]
    pub decimals: BTreeMap<AssetId, u8>,
    /// Direct prices.
    #[serde(default)]
    pub feeds: Vec<FeedEntry>,
}

/// One direct price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    pub base: AssetId,
    pub quote: AssetId,
    #[serde(default)]
    pub bid: Option<Decimal>,
    #[serde(default)]
    pub ask: Option<Decimal>,
    /// Single price for feeds without a spread.
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default = "default_valid_for")]
    pub valid_for_seconds: i64,
}

fn default_valid_for() -> i64 {
    DEFAULT_VALID_FOR_SECONDS
}

impl FeedEntry {
    /// Build the feed price, validating that it is usable.
    pub fn to_price(&self, source: &str) -> anyhow::Result<FeedPrice> {
        let pair = Pair::new(self.base, self.quote);

        let price = match (self.price, self.bid, self.ask) {
            (Some(price), None, None) => {
                FeedPrice::single(pair, price, self.valid_for_seconds, source)
            }
            (None, Some(bid), Some(ask)) => {
                FeedPrice::new(pair, bid, ask, self.valid_for_seconds, source)
            }
            (Some(_), _, _) => bail!("{}: give either price or bid/ask, not both", pair),
            _ => bail!("{}: both bid and ask are required", pair),
        };

        price
            .validate()
            .with_context(|| format!("{}: unusable price", pair))?;
        Ok(price)
    }
}

impl FeedFile {
    /// Load a feed table from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse a feed table from JSON text.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Engine configuration, validated.
    pub fn oracle_config(&self) -> anyhow::Result<OracleConfig> {
        let config = self.config.clone().unwrap_or_else(OracleConfig::from_env);
        config
            .validate()
            .map_err(|e| anyhow!("Invalid oracle configuration: {}", e))?;
        Ok(config)
    }

    /// Populate an in-memory feed provider.
    pub fn feed_provider(&self, name: &str) -> anyhow::Result<StaticFeedProvider> {
        let provider = StaticFeedProvider::new(name);
        for entry in &self.feeds {
            provider.set_price(entry.to_price(name)?);
        }
        Ok(provider)
    }

    /// Populate an in-memory metadata provider.
    pub fn metadata(&self) -> StaticMetadata {
        let metadata = StaticMetadata::new("feed-file");
        for (asset, decimals) in &self.decimals {
            if !asset.is_synthetic() {
                metadata.set_decimals(asset.address(), *decimals);
            }
        }
        metadata
    }
}
