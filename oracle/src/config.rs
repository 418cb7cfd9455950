//! Oracle configuration.

use crossquote_common::{AssetId, Pair};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Upper bound accepted for `max_legs`.
pub const MAX_LEGS_LIMIT: usize = 4;

/// Upper bound accepted for spread widening.
pub const MAX_WIDEN_BPS: u32 = 5000;

/// How the single-sided midpoint is derived from bid and ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MidpointStrategy {
    /// `floor(sqrt(bid * ask))`; the geometric mean of the end-to-end prices.
    #[default]
    Geometric,
    /// `floor((bid + ask) / 2)` over the output amounts.
    Arithmetic,
}

impl fmt::Display for MidpointStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidpointStrategy::Geometric => write!(f, "geometric"),
            MidpointStrategy::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

impl FromStr for MidpointStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geometric" => Ok(MidpointStrategy::Geometric),
            "arithmetic" => Ok(MidpointStrategy::Arithmetic),
            other => Err(format!("Unknown midpoint strategy: {}", other)),
        }
    }
}

/// Adjustment applied to every leg's feed price before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum SpreadPolicy {
    /// Use feed bid/ask as reported.
    #[default]
    Passthrough,
    /// Lower bid and raise ask by `bps` basis points each.
    Widen { bps: u32 },
}

impl fmt::Display for SpreadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpreadPolicy::Passthrough => write!(f, "passthrough"),
            SpreadPolicy::Widen { bps } => write!(f, "widen {} bps", bps),
        }
    }
}

/// Configuration for the quote engine.
///
/// Held as an immutable snapshot by the engine; updates replace it whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Descriptive label returned by `name()`.
    pub name: String,
    /// Intermediate assets allowed in a cross, highest priority first.
    pub anchors: Vec<AssetId>,
    /// Maximum number of legs in a resolved path.
    pub max_legs: usize,
    /// Known direct legs. Empty means "whatever the feed supports".
    pub legs: Vec<Pair>,
    /// Spread policy applied per leg.
    pub spread: SpreadPolicy,
    /// Midpoint derivation for `get_quote`.
    pub midpoint: MidpointStrategy,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            name: "CrossQuoteOracle".to_string(),
            anchors: vec![AssetId::usd()],
            max_legs: 3,
            legs: Vec::new(),
            spread: SpreadPolicy::Passthrough,
            midpoint: MidpointStrategy::Geometric,
        }
    }
}

impl OracleConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("ORACLE_NAME") {
            config.name = name;
        }

        if let Ok(anchors) = std::env::var("ORACLE_ANCHORS") {
            match anchors
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(AssetId::from_str)
                .collect::<Result<Vec<_>, _>>()
            {
                Ok(parsed) => config.anchors = parsed,
                Err(e) => warn!(error = %e, "Ignoring ORACLE_ANCHORS"),
            }
        }

        if let Ok(max_legs) = std::env::var("ORACLE_MAX_LEGS") {
            if let Ok(max_legs) = max_legs.parse() {
                config.max_legs = max_legs;
            }
        }

        if let Ok(bps) = std::env::var("ORACLE_SPREAD_BPS") {
            if let Ok(bps) = bps.parse::<u32>() {
                config.spread = if bps == 0 {
                    SpreadPolicy::Passthrough
                } else {
                    SpreadPolicy::Widen { bps }
                };
            }
        }

        if let Ok(midpoint) = std::env::var("ORACLE_MIDPOINT") {
            match midpoint.parse() {
                Ok(midpoint) => config.midpoint = midpoint,
                Err(e) => warn!(error = %e, "Ignoring ORACLE_MIDPOINT"),
            }
        }

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_legs == 0 || self.max_legs > MAX_LEGS_LIMIT {
            return Err(format!(
                "max_legs must be between 1 and {}",
                MAX_LEGS_LIMIT
            ));
        }

        for (i, anchor) in self.anchors.iter().enumerate() {
            if self.anchors[..i].contains(anchor) {
                return Err(format!("Duplicate anchor: {}", anchor));
            }
        }

        if let Some(pair) = self.legs.iter().find(|pair| pair.is_identity()) {
            return Err(format!("Leg {} has the same base and quote", pair));
        }

        if let SpreadPolicy::Widen { bps } = self.spread {
            if bps > MAX_WIDEN_BPS {
                return Err(format!(
                    "Spread widening {} bps exceeds maximum {} bps",
                    bps, MAX_WIDEN_BPS
                ));
            }
        }

        Ok(())
    }
}
