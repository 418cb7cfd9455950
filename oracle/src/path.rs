//! Leg resolution: direct legs, bounded cross search and paths.

use crossquote_common::{AssetId, Pair};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

use crate::config::MAX_LEGS_LIMIT;

/// Orientation of a leg relative to how its feed stores the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Converts feed base into feed quote.
    Forward,
    /// Converts feed quote into feed base.
    Inverted,
}

/// One directly-priceable step of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// The pair as stored by the feed.
    pub pair: Pair,
    /// How the pair is traversed.
    pub direction: Direction,
}

impl Leg {
    /// Asset this leg converts from.
    pub fn from(&self) -> AssetId {
        match self.direction {
            Direction::Forward => self.pair.base,
            Direction::Inverted => self.pair.quote,
        }
    }

    /// Asset this leg converts into.
    pub fn to(&self) -> AssetId {
        match self.direction {
            Direction::Forward => self.pair.quote,
            Direction::Inverted => self.pair.base,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.direction == Direction::Inverted
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Forward => write!(f, "{}", self.pair),
            Direction::Inverted => write!(f, "{} (inverted)", self.pair),
        }
    }
}

/// An ordered leg sequence mapping `base` to `quote`.
///
/// Each leg's `to()` is the next leg's `from()`. An empty path is the
/// identity and only exists when base equals quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    base: AssetId,
    quote: AssetId,
    legs: Vec<Leg>,
}

impl Path {
    /// The empty path from an asset to itself.
    pub fn identity(asset: AssetId) -> Self {
        Self {
            base: asset,
            quote: asset,
            legs: Vec::new(),
        }
    }

    /// Build a path, returning `None` if the legs do not chain from base to quote.
    pub fn new(base: AssetId, quote: AssetId, legs: Vec<Leg>) -> Option<Self> {
        let mut at = base;
        for leg in &legs {
            if leg.from() != at {
                return None;
            }
            at = leg.to();
        }
        if at != quote {
            return None;
        }
        Some(Self { base, quote, legs })
    }

    pub fn base(&self) -> AssetId {
        self.base
    }

    pub fn quote(&self) -> AssetId {
        self.quote
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_identity(&self) -> bool {
        self.legs.is_empty()
    }

    /// Every asset visited, base first and quote last.
    pub fn hops(&self) -> Vec<AssetId> {
        let mut hops = Vec::with_capacity(self.legs.len() + 1);
        hops.push(self.base);
        hops.extend(self.legs.iter().map(Leg::to));
        hops
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.legs.is_empty() {
            return write!(f, "identity");
        }
        for (i, leg) in self.legs.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", leg)?;
        }
        Ok(())
    }
}

/// The set of pairs with a direct feed.
///
/// Ordered so that every traversal is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegGraph {
    pairs: BTreeSet<Pair>,
}

impl LegGraph {
    /// Build from the known direct pairs. Identity pairs are ignored.
    pub fn new(pairs: impl IntoIterator<Item = Pair>) -> Self {
        Self {
            pairs: pairs.into_iter().filter(|p| !p.is_identity()).collect(),
        }
    }

    /// All known pairs, in order.
    pub fn pairs(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Whether any known pair involves the asset.
    pub fn contains_asset(&self, asset: AssetId) -> bool {
        self.pairs
            .iter()
            .any(|p| p.base == asset || p.quote == asset)
    }

    /// The direct leg from one asset to another, preferring the forward
    /// orientation.
    pub fn direct_leg(&self, from: AssetId, to: AssetId) -> Option<Leg> {
        let pair = Pair::new(from, to);
        if self.pairs.contains(&pair) {
            return Some(Leg {
                pair,
                direction: Direction::Forward,
            });
        }
        let inverse = pair.inverse();
        if self.pairs.contains(&inverse) {
            return Some(Leg {
                pair: inverse,
                direction: Direction::Inverted,
            });
        }
        None
    }

    /// Find the shortest path of at most `max_legs` legs from base to quote.
    /// `max_legs` is capped at [`MAX_LEGS_LIMIT`].
    ///
    /// Intermediate assets must be anchors. Among paths of equal length the
    /// one whose anchor sequence comes first in `anchors` order wins.
    pub fn resolve(
        &self,
        base: AssetId,
        quote: AssetId,
        anchors: &[AssetId],
        max_legs: usize,
    ) -> Option<Path> {
        if base == quote {
            return Some(Path::identity(base));
        }

        // A longer path would have to revisit an anchor.
        let bound = max_legs.min(MAX_LEGS_LIMIT).min(anchors.len() + 1);

        for length in 1..=bound {
            let mut visited = vec![base];
            if let Some(legs) = self.search(&mut visited, quote, anchors, length) {
                debug!(
                    base = %base,
                    quote = %quote,
                    legs = legs.len(),
                    "Resolved path"
                );
                return Path::new(base, quote, legs);
            }
        }

        debug!(base = %base, quote = %quote, max_legs, "No path");
        None
    }

    /// Depth-first search for a path of exactly `remaining` legs.
    fn search(
        &self,
        visited: &mut Vec<AssetId>,
        quote: AssetId,
        anchors: &[AssetId],
        remaining: usize,
    ) -> Option<Vec<Leg>> {
        let from = *visited.last()?;

        if remaining == 1 {
            return self.direct_leg(from, quote).map(|leg| vec![leg]);
        }

        for &anchor in anchors {
            if anchor == quote || visited.contains(&anchor) {
                continue;
            }
            let Some(leg) = self.direct_leg(from, anchor) else {
                continue;
            };

            visited.push(anchor);
            if let Some(mut rest) = self.search(visited, quote, anchors, remaining - 1) {
                rest.insert(0, leg);
                return Some(rest);
            }
            visited.pop();
        }

        None
    }
}
