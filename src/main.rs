use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lp_cutoffs::config::{RunConfig, parse_out_arg};
use lp_cutoffs::cutoff_table::CutoffTable;
use lp_cutoffs::http_client::http_client;
use lp_cutoffs::league_fetch::RiotLeagueSource;
use lp_cutoffs::orchestrator::run_once;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut cfg = RunConfig::from_env()?;
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if let Some(path) = parse_out_arg(&args) {
        cfg.output_path = path;
    }

    let table = CutoffTable::default();
    table.validate()?;

    let client = http_client(cfg.request_timeout)?;
    let source = RiotLeagueSource::new(client, cfg.api_key.clone());

    run_once(&source, &table, &cfg).context("cutoff refresh aborted")?;
    println!("Data saved to {}", cfg.output_path.display());
    Ok(())
}
