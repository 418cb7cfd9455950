//! Decimal precision lookup for assets.

use alloy_primitives::Address;
use async_trait::async_trait;
use crossquote_common::{Asset, AssetId};
use dashmap::DashMap;
use std::sync::Arc;

use crate::error::MetadataError;

/// Source of token metadata.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Get the decimals reported by a token.
    async fn decimals(&self, token: Address) -> Result<u8, MetadataError>;
}

/// In-memory token metadata.
pub struct StaticMetadata {
    name: String,
    decimals: DashMap<Address, u8>,
}

impl StaticMetadata {
    /// Create an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decimals: DashMap::new(),
        }
    }

    /// Set the decimals for a token.
    pub fn set_decimals(&self, token: Address, decimals: u8) {
        self.decimals.insert(token, decimals);
    }

    /// Builder form of [`Self::set_decimals`].
    pub fn with_decimals(self, token: Address, decimals: u8) -> Self {
        self.set_decimals(token, decimals);
        self
    }
}

#[async_trait]
impl MetadataProvider for StaticMetadata {
    fn name(&self) -> &str {
        &self.name
    }

    async fn decimals(&self, token: Address) -> Result<u8, MetadataError> {
        self.decimals
            .get(&token)
            .map(|d| *d)
            .ok_or(MetadataError::UnknownAsset(token))
    }
}

/// Resolves the decimal precision of any asset identifier.
///
/// Synthetic fiat assets are fixed at 18 decimals and never reach the
/// metadata provider.
#[derive(Clone)]
pub struct DecimalNormalizer {
    metadata: Arc<dyn MetadataProvider>,
}

impl DecimalNormalizer {
    /// Create a normalizer backed by a metadata provider.
    pub fn new(metadata: Arc<dyn MetadataProvider>) -> Self {
        Self { metadata }
    }

    /// Get the decimals of an asset.
    pub async fn decimals_of(&self, asset: AssetId) -> Result<u8, MetadataError> {
        match asset.classify() {
            Asset::SyntheticFiat(_) => Ok(Asset::SYNTHETIC_DECIMALS),
            Asset::Token(address) => self.metadata.decimals(address).await,
        }
    }
}
