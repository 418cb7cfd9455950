//! Quote façade: path resolution, composition and midpoint derivation.

use std::sync::Arc;

use alloy_primitives::U256;
use crossquote_common::{AssetId, FeedPrice, Pair};
use futures::future::{join, try_join, try_join_all};
use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::compose::compose_path;
use crate::config::{OracleConfig, MAX_LEGS_LIMIT};
use crate::conversion::{LegPrice, PricedLeg, TwoSidedAmount};
use crate::decimals::{DecimalNormalizer, MetadataProvider};
use crate::error::{FeedError, OracleError, OracleResult};
use crate::path::{Leg, LegGraph, Path};
use crate::provider::FeedProvider;

/// Configuration and the leg graph derived from it.
///
/// Never mutated; a configuration update swaps in a new snapshot.
#[derive(Debug)]
struct Snapshot {
    config: OracleConfig,
    graph: LegGraph,
}

/// The cross-pair quote engine.
pub struct CrossOracle {
    feeds: Arc<dyn FeedProvider>,
    decimals: DecimalNormalizer,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl CrossOracle {
    /// Create an engine over a feed provider and a metadata provider.
    ///
    /// When `config.legs` is empty the known legs are taken from the feed's
    /// supported pairs.
    pub fn new(
        feeds: Arc<dyn FeedProvider>,
        metadata: Arc<dyn MetadataProvider>,
        config: OracleConfig,
    ) -> Self {
        let snapshot = Self::build_snapshot(feeds.as_ref(), config);
        Self {
            feeds,
            decimals: DecimalNormalizer::new(metadata),
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    fn build_snapshot(feeds: &dyn FeedProvider, config: OracleConfig) -> Snapshot {
        if let Err(e) = config.validate() {
            warn!(error = %e, "Oracle configuration out of range, path search is capped");
        }

        let graph = if config.legs.is_empty() {
            LegGraph::new(feeds.supported_pairs())
        } else {
            LegGraph::new(config.legs.iter().copied())
        };

        info!(
            name = %config.name,
            legs = graph.len(),
            anchors = config.anchors.len(),
            max_legs = config.max_legs,
            "Oracle configuration loaded"
        );

        Snapshot { config, graph }
    }

    fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot.read().clone()
    }

    /// Replace the configuration. Requests already running keep the
    /// snapshot they started with.
    pub fn replace_config(&self, config: OracleConfig) {
        let snapshot = Self::build_snapshot(self.feeds.as_ref(), config);
        *self.snapshot.write() = Arc::new(snapshot);
    }

    /// Current configuration.
    pub fn config(&self) -> OracleConfig {
        self.snapshot().config.clone()
    }

    /// Descriptive label.
    pub fn name(&self) -> String {
        self.snapshot().config.name.clone()
    }

    /// Known direct pairs.
    pub fn supported_pairs(&self) -> Vec<Pair> {
        self.snapshot().graph.pairs().copied().collect()
    }

    /// Resolve the leg sequence used for a pair.
    ///
    /// Only consults the leg graph; decimals are not looked up.
    pub fn resolve_path(&self, base: AssetId, quote: AssetId) -> OracleResult<Path> {
        Self::resolve_in(&self.snapshot(), base, quote)
    }

    fn resolve_in(snapshot: &Snapshot, base: AssetId, quote: AssetId) -> OracleResult<Path> {
        if base == quote {
            return Ok(Path::identity(base));
        }
        if !snapshot.graph.contains_asset(base) {
            return Err(OracleError::BaseUnsupported(base));
        }
        if !snapshot.graph.contains_asset(quote) {
            return Err(OracleError::QuoteUnsupported(quote));
        }

        snapshot
            .graph
            .resolve(
                base,
                quote,
                &snapshot.config.anchors,
                snapshot.config.max_legs,
            )
            .ok_or(OracleError::NoPath { base, quote })
    }

    /// Describe how a pair currently resolves.
    pub fn describe(&self, base: AssetId, quote: AssetId) -> String {
        let snapshot = self.snapshot();
        let config = &snapshot.config;
        let pair = Pair::new(base, quote);

        let route = match Self::resolve_in(&snapshot, base, quote) {
            Ok(path) if path.is_identity() => "identity".to_string(),
            Ok(path) if path.len() == 1 => format!("direct feed {}", path),
            Ok(path) => format!("via {}", path),
            Err(OracleError::NoPath { .. }) => {
                format!("no path within {} legs", config.max_legs.min(MAX_LEGS_LIMIT))
            }
            Err(e) => e.to_string().to_lowercase(),
        };

        format!(
            "{} {}; feed: {}; spread: {}; midpoint: {}",
            pair,
            route,
            self.feeds.name(),
            config.spread,
            config.midpoint
        )
    }

    /// One-sided quote: the midpoint of the two-sided quote, using the
    /// configured midpoint strategy.
    #[instrument(skip(self), fields(base = %base, quote = %quote, in_amount = %in_amount))]
    pub async fn get_quote(
        &self,
        in_amount: U256,
        base: AssetId,
        quote: AssetId,
    ) -> OracleResult<U256> {
        let snapshot = self.snapshot();
        let quotes = self.quote_with(&snapshot, in_amount, base, quote).await?;
        let out_amount = quotes.midpoint(snapshot.config.midpoint);

        info!(
            out_amount = %out_amount,
            midpoint = %snapshot.config.midpoint,
            "Quote resolved"
        );

        Ok(out_amount)
    }

    /// Two-sided quote.
    #[instrument(skip(self), fields(base = %base, quote = %quote, in_amount = %in_amount))]
    pub async fn get_quotes(
        &self,
        in_amount: U256,
        base: AssetId,
        quote: AssetId,
    ) -> OracleResult<TwoSidedAmount> {
        let snapshot = self.snapshot();
        let quotes = self.quote_with(&snapshot, in_amount, base, quote).await?;

        info!(bid = %quotes.bid, ask = %quotes.ask, "Quotes resolved");

        Ok(quotes)
    }

    async fn quote_with(
        &self,
        snapshot: &Snapshot,
        in_amount: U256,
        base: AssetId,
        quote: AssetId,
    ) -> OracleResult<TwoSidedAmount> {
        let (base_decimals, quote_decimals) =
            join(self.decimals.decimals_of(base), self.decimals.decimals_of(quote)).await;

        let base_decimals = base_decimals.map_err(|e| {
            warn!(asset = %base, error = %e, "Base decimals unavailable");
            OracleError::BaseUnsupported(base)
        })?;
        if base != quote && !snapshot.graph.contains_asset(base) {
            return Err(OracleError::BaseUnsupported(base));
        }
        let quote_decimals = quote_decimals.map_err(|e| {
            warn!(asset = %quote, error = %e, "Quote decimals unavailable");
            OracleError::QuoteUnsupported(quote)
        })?;

        let path = Self::resolve_in(snapshot, base, quote)?;
        debug!(path = %path, "Path resolved");

        if path.is_identity() {
            return Ok(TwoSidedAmount::identity(in_amount));
        }

        let no_path = OracleError::NoPath { base, quote };
        let hops = path.hops();
        let intermediates = &hops[1..hops.len() - 1];

        let (prices, intermediate_decimals) = try_join(
            try_join_all(
                path.legs()
                    .iter()
                    .map(|leg| self.fetch_leg_price(leg, &no_path)),
            ),
            try_join_all(intermediates.iter().map(|asset| {
                let no_path = &no_path;
                async move {
                    self.decimals.decimals_of(*asset).await.map_err(|e| {
                        warn!(asset = %asset, error = %e, "Anchor decimals unavailable");
                        no_path.clone()
                    })
                }
            })),
        )
        .await?;

        let mut decimals = Vec::with_capacity(hops.len());
        decimals.push(base_decimals);
        decimals.extend(intermediate_decimals);
        decimals.push(quote_decimals);

        let mut priced = Vec::with_capacity(path.len());
        for (i, (leg, feed)) in path.legs().iter().zip(&prices).enumerate() {
            let price = LegPrice::from_feed(feed).map_err(|e| {
                warn!(leg = %leg, error = %e, "Unusable feed price");
                no_path.clone()
            })?;

            priced.push(PricedLeg {
                leg: *leg,
                price: price
                    .oriented(leg.direction)
                    .widened(snapshot.config.spread),
                from_decimals: decimals[i],
                to_decimals: decimals[i + 1],
            });
        }

        compose_path(in_amount, &priced)
    }

    /// Fetch a leg's feed price; any failure makes the leg unusable.
    async fn fetch_leg_price(&self, leg: &Leg, on_failure: &OracleError) -> OracleResult<FeedPrice> {
        let result = match self.feeds.get_price(&leg.pair).await {
            Ok(price) if price.pair != leg.pair => Err(FeedError::ProviderError(format!(
                "requested {}, got {}",
                leg.pair, price.pair
            ))),
            Ok(price) if !price.is_valid() => Err(FeedError::PriceExpired(leg.pair)),
            other => other,
        };

        result.map_err(|e| {
            warn!(
                provider = self.feeds.name(),
                pair = %leg.pair,
                error = %e,
                "Leg price unavailable"
            );
            on_failure.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MidpointStrategy, SpreadPolicy};
    use crate::decimals::StaticMetadata;
    use crate::provider::StaticFeedProvider;
    use alloy_primitives::Address;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn dai() -> AssetId {
        AssetId::new(Address::repeat_byte(0xda))
    }

    fn usdc() -> AssetId {
        AssetId::new(Address::repeat_byte(0xa0))
    }

    fn unlisted() -> AssetId {
        AssetId::new(Address::repeat_byte(0x99))
    }

    fn e18() -> U256 {
        U256::from(1_000_000_000_000_000_000u64)
    }

    fn set(feeds: &StaticFeedProvider, base: AssetId, quote: AssetId, bid: Decimal, ask: Decimal) {
        feeds.set_price(FeedPrice::new(Pair::new(base, quote), bid, ask, 30, "TEST"));
    }

    fn setup_feeds() -> Arc<StaticFeedProvider> {
        let feeds = Arc::new(StaticFeedProvider::new("test"));
        set(&feeds, AssetId::eur(), AssetId::usd(), dec!(1.0995), dec!(1.1005));
        set(&feeds, dai(), usdc(), dec!(0.9999), dec!(1.0001));
        set(&feeds, usdc(), AssetId::usd(), dec!(0.9998), dec!(1.0002));
        set(&feeds, AssetId::gbp(), AssetId::usd(), dec!(1.2695), dec!(1.2705));
        feeds
    }

    fn setup_metadata() -> Arc<StaticMetadata> {
        Arc::new(
            StaticMetadata::new("test")
                .with_decimals(dai().address(), 18)
                .with_decimals(usdc().address(), 6)
                .with_decimals(unlisted().address(), 18),
        )
    }

    fn setup_oracle() -> CrossOracle {
        let config = OracleConfig {
            anchors: vec![AssetId::usd(), usdc()],
            ..Default::default()
        };
        CrossOracle::new(setup_feeds(), setup_metadata(), config)
    }

    #[tokio::test]
    async fn test_direct_pair() {
        let oracle = setup_oracle();

        let quotes = oracle
            .get_quotes(e18(), AssetId::eur(), AssetId::usd())
            .await
            .unwrap();
        assert_eq!(quotes.bid, U256::from(1_099_500_000_000_000_000u64));
        assert_eq!(quotes.ask, U256::from(1_100_500_000_000_000_000u64));

        let mid = oracle
            .get_quote(e18(), AssetId::eur(), AssetId::usd())
            .await
            .unwrap();
        assert_eq!(mid, U256::from(1_099_999_886_363_630_493u64));
    }

    #[tokio::test]
    async fn test_arithmetic_midpoint() {
        let oracle = setup_oracle();
        oracle.replace_config(OracleConfig {
            anchors: vec![AssetId::usd(), usdc()],
            midpoint: MidpointStrategy::Arithmetic,
            ..Default::default()
        });

        let mid = oracle
            .get_quote(e18(), AssetId::eur(), AssetId::usd())
            .await
            .unwrap();
        assert_eq!(mid, U256::from(1_100_000_000_000_000_000u64));
    }

    #[tokio::test]
    async fn test_inverted_pair() {
        let oracle = setup_oracle();

        let forward = oracle
            .get_quotes(e18(), AssetId::eur(), AssetId::usd())
            .await
            .unwrap();
        let inverse = oracle
            .get_quotes(e18(), AssetId::usd(), AssetId::eur())
            .await
            .unwrap();

        // bid' = floor(1e36 / ask), ask' = ceil(1e36 / bid)
        let one = e18() * e18();
        assert_eq!(inverse.bid, one / forward.ask);
        assert_eq!(inverse.ask, (one + forward.bid - U256::from(1u64)) / forward.bid);
    }

    #[tokio::test]
    async fn test_three_leg_cross() {
        let oracle = setup_oracle();

        let path = oracle.resolve_path(dai(), AssetId::eur()).unwrap();
        assert_eq!(path.hops(), vec![dai(), usdc(), AssetId::usd(), AssetId::eur()]);
        assert!(path.legs()[2].is_inverted());

        let quotes = oracle.get_quotes(e18(), dai(), AssetId::eur()).await.unwrap();
        assert_eq!(quotes.bid, U256::from(908_405_288_505_224_897u64));
        assert_eq!(quotes.ask, U256::from(909_777_189_631_650_751u64));

        let mid = oracle.get_quote(e18(), dai(), AssetId::eur()).await.unwrap();
        assert_eq!(mid, U256::from(909_090_980_277_998_578u64));
    }

    #[tokio::test]
    async fn test_identity() {
        let oracle = setup_oracle();
        let amount = U256::from(123_456u64);

        assert_eq!(oracle.get_quote(amount, usdc(), usdc()).await.unwrap(), amount);
        assert_eq!(
            oracle.get_quote(amount, AssetId::jpy(), AssetId::jpy()).await.unwrap(),
            amount
        );
    }

    #[tokio::test]
    async fn test_error_mapping() {
        let oracle = setup_oracle();
        let unknown = AssetId::new(Address::repeat_byte(0x42));

        // No metadata for the base: base side, even though the quote is fine
        assert_eq!(
            oracle.get_quotes(e18(), unknown, AssetId::usd()).await,
            Err(OracleError::BaseUnsupported(unknown))
        );
        assert_eq!(
            oracle.get_quotes(e18(), AssetId::usd(), unknown).await,
            Err(OracleError::QuoteUnsupported(unknown))
        );
        // Base checked before quote
        let other = AssetId::new(Address::repeat_byte(0x43));
        assert_eq!(
            oracle.get_quotes(e18(), unknown, other).await,
            Err(OracleError::BaseUnsupported(unknown))
        );

        // Decimals known but no feed mentions the asset
        assert_eq!(
            oracle.get_quotes(e18(), unlisted(), AssetId::usd()).await,
            Err(OracleError::BaseUnsupported(unlisted()))
        );
        assert_eq!(
            oracle.get_quotes(e18(), AssetId::usd(), AssetId::jpy()).await,
            Err(OracleError::QuoteUnsupported(AssetId::jpy()))
        );
    }

    #[tokio::test]
    async fn test_no_path() {
        let config = OracleConfig {
            anchors: vec![AssetId::usd()],
            ..Default::default()
        };
        let oracle = CrossOracle::new(setup_feeds(), setup_metadata(), config);

        // USDC is not an anchor, so DAI cannot reach EUR
        assert_eq!(
            oracle.get_quotes(e18(), dai(), AssetId::eur()).await,
            Err(OracleError::NoPath {
                base: dai(),
                quote: AssetId::eur()
            })
        );

        // GBP -> USD -> EUR is two legs
        assert!(oracle.get_quotes(e18(), AssetId::gbp(), AssetId::eur()).await.is_ok());
    }

    #[tokio::test]
    async fn test_path_bound() {
        let oracle = setup_oracle();
        oracle.replace_config(OracleConfig {
            anchors: vec![AssetId::usd(), usdc()],
            max_legs: 2,
            ..Default::default()
        });

        assert!(matches!(
            oracle.get_quotes(e18(), dai(), AssetId::eur()).await,
            Err(OracleError::NoPath { .. })
        ));
    }

    #[tokio::test]
    async fn test_oversized_max_legs_still_terminates() {
        let oracle = setup_oracle();
        oracle.replace_config(OracleConfig {
            anchors: vec![AssetId::usd()],
            max_legs: usize::MAX,
            ..Default::default()
        });

        assert_eq!(
            oracle.resolve_path(dai(), AssetId::eur()),
            Err(OracleError::NoPath {
                base: dai(),
                quote: AssetId::eur()
            })
        );
        assert!(matches!(
            oracle.get_quotes(e18(), dai(), AssetId::eur()).await,
            Err(OracleError::NoPath { .. })
        ));
        assert!(oracle.get_quotes(e18(), AssetId::gbp(), AssetId::eur()).await.is_ok());
    }

    #[tokio::test]
    async fn test_feed_failure_fails_whole_request() {
        let feeds = setup_feeds();
        let config = OracleConfig {
            anchors: vec![AssetId::usd(), usdc()],
            ..Default::default()
        };
        let oracle = CrossOracle::new(feeds.clone(), setup_metadata(), config);

        // The leg graph still lists USDC/USD; the feed no longer prices it
        feeds.remove_price(&Pair::new(usdc(), AssetId::usd()));

        assert!(matches!(
            oracle.get_quotes(e18(), dai(), AssetId::eur()).await,
            Err(OracleError::NoPath { .. })
        ));
    }

    #[tokio::test]
    async fn test_expired_feed_price() {
        let feeds = setup_feeds();
        feeds.set_price(FeedPrice::new(
            Pair::new(AssetId::eur(), AssetId::usd()),
            dec!(1.0995),
            dec!(1.1005),
            -1,
            "TEST",
        ));
        let oracle = CrossOracle::new(feeds, setup_metadata(), OracleConfig::default());

        assert!(matches!(
            oracle.get_quotes(e18(), AssetId::eur(), AssetId::usd()).await,
            Err(OracleError::NoPath { .. })
        ));
    }

    #[tokio::test]
    async fn test_overflow() {
        let oracle = setup_oracle();

        assert_eq!(
            oracle.get_quotes(U256::MAX, AssetId::eur(), AssetId::usd()).await,
            Err(OracleError::Overflow)
        );
        // 6 -> 18 decimals scales by 10^12
        assert_eq!(
            oracle
                .get_quotes(U256::MAX / U256::from(1_000_000u64), usdc(), AssetId::usd())
                .await,
            Err(OracleError::Overflow)
        );
    }

    #[tokio::test]
    async fn test_spread_widening() {
        let oracle = setup_oracle();
        oracle.replace_config(OracleConfig {
            anchors: vec![AssetId::usd(), usdc()],
            spread: SpreadPolicy::Widen { bps: 10 },
            ..Default::default()
        });

        let quotes = oracle
            .get_quotes(e18(), AssetId::eur(), AssetId::usd())
            .await
            .unwrap();
        // 1.0995 * 0.999 and 1.1005 * 1.001
        assert_eq!(quotes.bid, U256::from(1_098_400_500_000_000_000u64));
        assert_eq!(quotes.ask, U256::from(1_101_600_500_000_000_000u64));
    }

    #[tokio::test]
    async fn test_explicit_legs_restrict_graph() {
        let oracle = setup_oracle();
        oracle.replace_config(OracleConfig {
            legs: vec![Pair::new(AssetId::eur(), AssetId::usd())],
            ..Default::default()
        });

        assert_eq!(oracle.supported_pairs(), vec![Pair::new(AssetId::eur(), AssetId::usd())]);
        assert_eq!(
            oracle.get_quotes(e18(), AssetId::gbp(), AssetId::usd()).await,
            Err(OracleError::BaseUnsupported(AssetId::gbp()))
        );
    }

    #[test]
    fn test_describe() {
        let oracle = setup_oracle();

        assert_eq!(oracle.name(), "CrossQuoteOracle");
        assert_eq!(
            oracle.describe(AssetId::eur(), AssetId::usd()),
            "EUR/USD direct feed EUR/USD; feed: test; spread: passthrough; midpoint: geometric"
        );
        assert_eq!(
            oracle.describe(AssetId::usd(), AssetId::eur()),
            "USD/EUR direct feed EUR/USD (inverted); feed: test; spread: passthrough; midpoint: geometric"
        );
        assert!(oracle
            .describe(dai(), AssetId::eur())
            .contains("-> EUR/USD (inverted)"));
        assert!(oracle
            .describe(AssetId::usd(), AssetId::jpy())
            .contains("quote asset unsupported"));
    }

    fn amount_strategy() -> impl Strategy<Value = U256> {
        (1u128..=u128::MAX / 2).prop_map(U256::from)
    }

    fn pair_strategy() -> impl Strategy<Value = (AssetId, AssetId)> {
        let assets = vec![dai(), usdc(), AssetId::usd(), AssetId::eur(), AssetId::gbp()];
        (0..assets.len(), 0..assets.len()).prop_map(move |(a, b)| (assets[a], assets[b]))
    }

    fn abs_diff(a: U256, b: U256) -> U256 {
        if a > b {
            a - b
        } else {
            b - a
        }
    }

    /// Quotes (A,B) and (B,A) for the same amount and checks
    /// `bid(B,A) * ask(A,B) ~= in^2` and `ask(B,A) * bid(A,B) ~= in^2`.
    ///
    /// Decimals cancel in both products. Each leg rounds by at most one unit
    /// and no hop holds fewer than 10^6 units for `in >= 10^18`, so a
    /// relative tolerance of 10^-5 covers three legs each way.
    fn check_reciprocal(oracle: &CrossOracle, amount: U256, a: AssetId, b: AssetId) -> bool {
        let forward = tokio_test::block_on(oracle.get_quotes(amount, a, b)).unwrap();
        let inverse = tokio_test::block_on(oracle.get_quotes(amount, b, a)).unwrap();

        let target = amount * amount;
        let tolerance = target / U256::from(100_000u64);

        abs_diff(inverse.bid * forward.ask, target) <= tolerance
            && abs_diff(inverse.ask * forward.bid, target) <= tolerance
    }

    #[test]
    fn test_inverse_quotes_are_reciprocal_across_three_legs() {
        let oracle = setup_oracle();
        assert!(check_reciprocal(&oracle, e18(), dai(), AssetId::eur()));
        assert!(check_reciprocal(&oracle, e18(), AssetId::eur(), dai()));
        assert!(check_reciprocal(&oracle, e18(), AssetId::gbp(), usdc()));
    }

    proptest! {
        #[test]
        fn prop_inverse_quotes_are_reciprocal(
            (base, quote) in pair_strategy(),
            amount in (1_000_000_000_000_000_000u128..=1_000_000_000_000_000_000_000_000_000_000u128)
                .prop_map(U256::from),
        ) {
            let oracle = setup_oracle();
            prop_assert!(check_reciprocal(&oracle, amount, base, quote));
        }


        #[test]
        fn prop_bid_mid_ask_ordering((base, quote) in pair_strategy(), amount in amount_strategy()) {
            let oracle = setup_oracle();
            let quotes = tokio_test::block_on(oracle.get_quotes(amount, base, quote)).unwrap();
            let mid = tokio_test::block_on(oracle.get_quote(amount, base, quote)).unwrap();

            prop_assert!(quotes.bid <= mid);
            prop_assert!(mid <= quotes.ask);
        }

        #[test]
        fn prop_monotonic_in_amount(
            (base, quote) in pair_strategy(),
            a in amount_strategy(),
            b in amount_strategy(),
        ) {
            let oracle = setup_oracle();
            let (small, large) = if a <= b { (a, b) } else { (b, a) };

            let low = tokio_test::block_on(oracle.get_quotes(small, base, quote)).unwrap();
            let high = tokio_test::block_on(oracle.get_quotes(large, base, quote)).unwrap();

            prop_assert!(low.bid <= high.bid);
            prop_assert!(low.ask <= high.ask);
        }

        #[test]
        fn prop_identity(amount in amount_strategy(), (asset, _) in pair_strategy()) {
            let oracle = setup_oracle();
            let mid = tokio_test::block_on(oracle.get_quote(amount, asset, asset)).unwrap();
            prop_assert_eq!(mid, amount);
        }

        #[test]
        fn prop_round_trip_never_gains(amount in amount_strategy(), (base, quote) in pair_strategy()) {
            // Selling at the bid and buying back at the bid loses (or keeps) value
            let oracle = setup_oracle();
            let out = tokio_test::block_on(oracle.get_quotes(amount, base, quote)).unwrap();
            let back = tokio_test::block_on(oracle.get_quotes(out.bid, quote, base)).unwrap();

            prop_assert!(back.bid <= amount);
        }
    }
}
