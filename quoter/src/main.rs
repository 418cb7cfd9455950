//! CrossQuote Quoter
//!
//! Quotes amounts against a static feed table, for checking oracle
//! configuration and feed data offline.

use std::path::PathBuf;
use std::sync::Arc;

use alloy_primitives::U256;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use crossquote_common::AssetId;
use crossquote_oracle::{
    CachedFeedProvider, CrossOracle, FeedCacheConfig, FeedProvider, MetadataProvider,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod feeds;
mod report;

use feeds::FeedFile;
use report::{Outcome, QuoteReport};

/// What to compute for the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// One-sided midpoint quote
    Quote,
    /// Bid and ask quotes
    Quotes,
    /// Describe how the pair resolves
    Describe,
}

/// CrossQuote Quoter CLI
#[derive(Parser, Debug)]
#[command(name = "quoter")]
#[command(about = "Quote amounts across direct and cross pairs")]
struct Args {
    /// Feed table (JSON)
    #[arg(short, long)]
    feeds: PathBuf,

    /// Asset to sell: 0x address, currency code (EUR) or ISO number (978)
    #[arg(short, long)]
    base: AssetId,

    /// Asset to quote in
    #[arg(short, long)]
    quote: AssetId,

    /// Amount of base in its smallest unit
    #[arg(short, long, default_value = "1000000000000000000")]
    amount: String,

    /// Output to compute
    #[arg(short, long, value_enum, default_value_t = Mode::Quotes)]
    mode: Mode,

    /// Cache feed prices for this many milliseconds (0 = no cache)
    #[arg(long, default_value = "0")]
    cache_ttl_ms: i64,

    /// Emit logs and the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the report on stdout stays parseable.
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(
            args.json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!args.json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();

    let in_amount: U256 = args
        .amount
        .parse()
        .with_context(|| format!("Invalid amount: {}", args.amount))?;

    let file = FeedFile::load(&args.feeds)?;
    let config = file.oracle_config()?;

    let static_feeds: Arc<dyn FeedProvider> = Arc::new(file.feed_provider("feed-file")?);
    let feeds: Arc<dyn FeedProvider> = if args.cache_ttl_ms > 0 {
        Arc::new(CachedFeedProvider::with_config(
            static_feeds,
            FeedCacheConfig {
                ttl: chrono::Duration::milliseconds(args.cache_ttl_ms),
                ..Default::default()
            },
        ))
    } else {
        static_feeds
    };
    let metadata: Arc<dyn MetadataProvider> = Arc::new(file.metadata());

    info!(
        feeds = file.feeds.len(),
        decimals = file.decimals.len(),
        "Feed table loaded"
    );

    let oracle = CrossOracle::new(feeds, metadata, config);

    let route = match oracle.resolve_path(args.base, args.quote) {
        Ok(path) => path.to_string(),
        Err(e) => e.to_string(),
    };

    let outcome = match args.mode {
        Mode::Quote => match oracle.get_quote(in_amount, args.base, args.quote).await {
            Ok(out_amount) => Outcome::quote(out_amount),
            Err(e) => Outcome::failed(&e),
        },
        Mode::Quotes => match oracle.get_quotes(in_amount, args.base, args.quote).await {
            Ok(amounts) => Outcome::quotes(&amounts),
            Err(e) => Outcome::failed(&e),
        },
        Mode::Describe => Outcome::Description {
            text: oracle.describe(args.base, args.quote),
        },
    };

    let failed = outcome.is_failure();
    let report = QuoteReport {
        oracle: oracle.name(),
        base: args.base,
        quote: args.quote,
        in_amount: in_amount.to_string(),
        route,
        outcome,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    if failed {
        warn!("Quote failed");
        std::process::exit(1);
    }

    Ok(())
}
