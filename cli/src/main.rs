//! Operator tool for The Gods collection.
//!
//! `refresh` asks OpenSea to re-read metadata for a range of token ids
//! (after a batch of attribute edits, for example). `ping` checks that a
//! running `gods-server` answers its health check.

use std::ops::RangeInclusive;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

const OPENSEA_API_BASE: &str = "https://api.opensea.io/api/v2";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange { start: u32, end: u32 },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed with HTTP {0}")]
    Unhealthy(u16),
    #[error("{failed} of {total} refreshes failed")]
    RefreshFailures { failed: usize, total: usize },
}

#[derive(Parser, Debug)]
#[command(name = "gods-cli", about = "The Gods collection maintenance CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a running server's `/healthz`.
    Ping {
        #[arg(long, env = "GODS_BASE_URL", default_value = "http://127.0.0.1:3000")]
        base_url: String,
    },
    /// Request an OpenSea metadata refresh for every id in a range.
    Refresh(RefreshArgs),
}

#[derive(Args, Debug, Clone)]
struct RefreshArgs {
    #[arg(long, env = "OPENSEA_API_KEY", hide_env_values = true)]
    api_key: String,

    #[arg(long, env = "GODS_CHAIN", default_value = "ethereum")]
    chain: String,

    #[arg(long, env = "GODS_CONTRACT", default_value = "0x134590acb661da2b318bcde6b39ef5cf8208e372")]
    contract: String,

    #[arg(long, default_value_t = 0)]
    start: u32,

    #[arg(long, default_value_t = 3332)]
    end: u32,

    /// Pause between requests to stay under the rate limit.
    #[arg(long, default_value_t = 300)]
    delay_ms: u64,
}

impl RefreshArgs {
    fn ids(&self) -> Result<RangeInclusive<u32>, CliError> {
        if self.start > self.end {
            return Err(CliError::InvalidRange { start: self.start, end: self.end });
        }
        Ok(self.start..=self.end)
    }
}

/// Per-id outcome of a refresh run.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RefreshOutcome {
    Refreshed(u16),
    Rejected(u16),
    Failed(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
struct RefreshSummary {
    refreshed: usize,
    rejected: usize,
    failed: usize,
}

impl RefreshSummary {
    fn record(&mut self, outcome: &RefreshOutcome) {
        match outcome {
            RefreshOutcome::Refreshed(_) => self.refreshed += 1,
            RefreshOutcome::Rejected(_) => self.rejected += 1,
            RefreshOutcome::Failed(_) => self.failed += 1,
        }
    }

    fn total(&self) -> usize {
        self.refreshed + self.rejected + self.failed
    }

    fn unsuccessful(&self) -> usize {
        self.rejected + self.failed
    }
}

fn refresh_url(chain: &str, contract: &str, id: u32) -> String {
    format!("{OPENSEA_API_BASE}/chain/{chain}/contract/{contract}/nfts/{id}/refresh")
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Ping { base_url } => run_ping(&base_url).await,
        Command::Refresh(args) => run_refresh(&args).await,
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let url = format!("{}/healthz", base_url.trim_end_matches('/'));
    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_refresh(args: &RefreshArgs) -> Result<(), CliError> {
    let ids = args.ids()?;
    let client = reqwest::Client::new();
    let delay = Duration::from_millis(args.delay_ms);
    let mut summary = RefreshSummary::default();

    tracing::info!(start = args.start, end = args.end, chain = %args.chain, contract = %args.contract, "refresh started");
    for id in ids {
        let outcome = refresh_one(&client, args, id).await;
        match &outcome {
            RefreshOutcome::Refreshed(status) => tracing::info!(id, status, "refreshed"),
            RefreshOutcome::Rejected(status) => tracing::warn!(id, status, "refresh rejected"),
            RefreshOutcome::Failed(error) => tracing::error!(id, %error, "refresh request failed"),
        }
        summary.record(&outcome);
        if id < args.end {
            tokio::time::sleep(delay).await;
        }
    }

    tracing::info!(
        refreshed = summary.refreshed,
        rejected = summary.rejected,
        failed = summary.failed,
        "refresh finished"
    );
    println!(
        "refreshed {} / rejected {} / failed {} (of {})",
        summary.refreshed,
        summary.rejected,
        summary.failed,
        summary.total()
    );

    match summary.unsuccessful() {
        0 => Ok(()),
        failed => Err(CliError::RefreshFailures { failed, total: summary.total() }),
    }
}

async fn refresh_one(client: &reqwest::Client, args: &RefreshArgs, id: u32) -> RefreshOutcome {
    let url = refresh_url(&args.chain, &args.contract, id);
    match client.post(url).header("x-api-key", &args.api_key).send().await {
        Ok(response) if response.status().is_success() => RefreshOutcome::Refreshed(response.status().as_u16()),
        Ok(response) => RefreshOutcome::Rejected(response.status().as_u16()),
        Err(e) => RefreshOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
