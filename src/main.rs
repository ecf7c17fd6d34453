use std::io::IsTerminal;

use anyhow::bail;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ghtrend::cache::CacheStore;
use ghtrend::config::{Cli, Config, format_interval};
use ghtrend::output::{self, Terminal, Tone};
use ghtrend::{ranking, source, watch};

/// Fetch, rank, and render once.
async fn run_once(config: &Config, cache: &CacheStore) -> anyhow::Result<()> {
    let mut fetched = source::fetch(config, cache).await;
    if fetched.repos.is_empty() {
        bail!("No data available");
    }

    source::persist(&fetched, cache);

    let now = Utc::now();
    fetched.repos = ranking::rank(fetched.repos, now);
    output::present(&fetched, config, now);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_cli(Cli::parse());

    // Diagnostics go to stderr so --json output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ghtrend=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.log_ansi(std::io::stderr().is_terminal()))
                .with_target(false)
                .without_time(),
        )
        .init();

    let cache = CacheStore::open_default();
    let term = Terminal::new(config.color);

    let Some(interval) = config.watch else {
        return run_once(&config, &cache).await;
    };

    watch::repeat_until(
        interval,
        tokio::signal::ctrl_c(),
        || run_once(&config, &cache),
        |interval| {
            term.eprint(
                format!(
                    "\nRefreshing in {}... (Ctrl+C to stop)",
                    format_interval(interval)
                ),
                Tone::Faint,
            )
        },
    )
    .await
}
