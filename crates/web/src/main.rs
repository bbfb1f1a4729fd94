use std::sync::Arc;

use anyhow::Context;
use storage::{
    CatalogRepository, LocalLedgerStore, models::Category, services::git_sync::GitSync,
};
use tokio::sync::Mutex;

mod app;
mod config;
mod error;
mod features;
mod remote;
mod state;

use config::Config;
use remote::{RemoteLedgerStore, SheetsStore, UnavailableRemote};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting NFL predictions pool API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let state = build_state(&config).context("Failed to initialize application state")?;

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app::router(state)).await?;

    Ok(())
}

fn build_state(config: &Config) -> anyhow::Result<AppState> {
    tracing::info!("Loading catalogs from {}", config.categories_dir.display());
    let catalogs = CatalogRepository::new(&config.categories_dir).load_all(Category::all());
    if catalogs.is_empty() {
        tracing::warn!("No category catalogs could be loaded; submissions will be rejected");
    } else {
        tracing::info!(
            "Loaded {} categories ({} unavailable)",
            catalogs.categories().len(),
            catalogs.failures().len()
        );
    }

    let local = LocalLedgerStore::new(&config.ledger_path);
    let ledger = local
        .load()
        .with_context(|| format!("Failed to read ledger at {}", config.ledger_path.display()))?;

    let remote: Option<Arc<dyn RemoteLedgerStore>> = config.sheets.as_ref().map(|sheets| {
        match SheetsStore::connect(sheets) {
            Ok(store) => Arc::new(store) as Arc<dyn RemoteLedgerStore>,
            Err(e) => {
                tracing::warn!("Remote spreadsheet cannot be written: {}", e);
                Arc::new(UnavailableRemote::new(e.to_string())) as Arc<dyn RemoteLedgerStore>
            }
        }
    });

    let git = config.git_sync.then(|| GitSync::new(&config.ledger_path));

    Ok(AppState {
        catalogs: Arc::new(catalogs),
        ledger: Arc::new(Mutex::new(ledger)),
        local,
        remote,
        git,
        history_path: config.history_path.clone(),
        outcomes_path: config.outcomes_path.clone(),
    })
}
