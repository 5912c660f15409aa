mod universe;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use berza_core::harvest::{DEFAULT_CONCURRENCY, DEFAULT_INCEPTION_YEAR};
use berza_core::{
    FileArchiveStore, HarvestConfig, HarvestMode, HarvestService, HarvestStatus,
};
use berza_market_data::{MseProvider, SymbolCode};

#[derive(Parser)]
#[command(
    name = "berza",
    version,
    about = "Trading-history harvester for the Macedonian Stock Exchange"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding one JSON archive per symbol
    #[arg(long, global = true, default_value = "./data")]
    data_dir: PathBuf,

    /// Maximum symbols with network requests in flight
    #[arg(long, global = true, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// First year a full backfill covers
    #[arg(long, global = true, default_value_t = DEFAULT_INCEPTION_YEAR)]
    from_year: i32,

    /// File with one symbol code per line, replacing the built-in universe
    #[arg(long, global = true)]
    symbols_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full backfill of every symbol from the inception year
    Backfill,
    /// Incremental update from each symbol's last known date
    Update,
    /// Smoke test: one fixed symbol, current year only
    Test,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_universe(path: Option<&Path>) -> Result<Vec<SymbolCode>> {
    let symbols = match path {
        Some(path) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("reading symbols file {}", path.display()))?;
            body.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(SymbolCode::new)
                .collect()
        }
        None => universe::DEFAULT_UNIVERSE
            .iter()
            .map(|code| SymbolCode::new(*code))
            .collect::<Vec<_>>(),
    };
    if symbols.is_empty() {
        bail!("symbol universe is empty");
    }
    Ok(symbols)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let (symbols, mode) = match cli.command {
        Commands::Backfill => (
            load_universe(cli.symbols_file.as_deref())?,
            HarvestMode::Backfill,
        ),
        Commands::Update => (
            load_universe(cli.symbols_file.as_deref())?,
            HarvestMode::Incremental,
        ),
        Commands::Test => (
            vec![SymbolCode::new(universe::SMOKE_TEST_SYMBOL)],
            HarvestMode::CurrentYearOnly,
        ),
    };

    let config = HarvestConfig::new(symbols)
        .with_concurrency(cli.concurrency)
        .with_inception_year(cli.from_year);

    let provider = Arc::new(MseProvider::new(cli.concurrency));
    let store = Arc::new(FileArchiveStore::new(&cli.data_dir));
    let service = HarvestService::new(provider, store, config);

    let summary = service.run(mode).await;

    for outcome in &summary.outcomes {
        match outcome.status {
            HarvestStatus::Persisted => info!(
                "Processed {}: {} records ({} new). Name: {}",
                outcome.symbol,
                outcome.records_total,
                outcome.records_added,
                outcome.company_name
            ),
            HarvestStatus::Failed => warn!(
                "Failed {}: {}",
                outcome.symbol,
                outcome.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
    info!("{}", summary.summary());

    if !summary.is_success() {
        bail!("{} symbols failed to persist", summary.failed);
    }
    Ok(())
}
