use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use odds::{
    BetfairCredentials, BetfairProvider, MockProvider, OddsProvider, TeamOdds,
    export::{DEFAULT_OUTPUT, write_csv},
    mock::mock_odds,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fetch-odds")]
#[command(about = "Fetch Super Bowl winner odds from the Betfair Exchange", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Skip the exchange and write the built-in table.
    #[arg(long)]
    mock: bool,

    #[arg(long, default_value_t = 10)]
    top: usize,

    #[arg(long, env = "BETFAIR_APP_KEY", hide_env_values = true)]
    app_key: Option<String>,

    #[arg(long, env = "BETFAIR_USERNAME")]
    username: Option<String>,

    #[arg(long, env = "BETFAIR_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("fetch_odds={},odds={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Fetching Super Bowl winner odds...");

    let credentials = BetfairCredentials::new(cli.app_key, cli.username, cli.password);
    let (source, odds) = match credentials {
        Some(credentials) if !cli.mock => fetch_live(credentials).await?,
        Some(_) => ("mock", MockProvider.fetch().await?),
        None => {
            if !cli.mock {
                tracing::warn!(
                    "Betfair credentials not found; set BETFAIR_APP_KEY, BETFAIR_USERNAME and BETFAIR_PASSWORD"
                );
            }
            ("mock", MockProvider.fetch().await?)
        }
    };

    write_csv(&cli.output, &odds, Local::now().naive_local())
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    tracing::info!("Found odds for {} teams ({})", odds.len(), source);
    print_favorites(&odds, cli.top);

    Ok(())
}

/// Any failure on the live path falls back to the mock table.
async fn fetch_live(credentials: BetfairCredentials) -> anyhow::Result<(&'static str, Vec<TeamOdds>)> {
    let provider = BetfairProvider::new(credentials)?;
    match provider.fetch().await {
        Ok(odds) => {
            tracing::info!("✓ Fetched live odds from Betfair");
            Ok((provider.name(), odds))
        }
        Err(e) => {
            tracing::warn!("Live fetch failed, using mock odds: {}", e);
            Ok(("mock", mock_odds()))
        }
    }
}

fn print_favorites(odds: &[TeamOdds], top: usize) {
    tracing::info!("Top {} favorites:", top.min(odds.len()));
    for (idx, row) in odds.iter().take(top).enumerate() {
        let price = row
            .odds
            .map(|o| format!("{:.2}", o))
            .unwrap_or_else(|| "-".to_string());
        tracing::info!("{:>2}. {:<28} {}", idx + 1, row.team, price);
    }
}
