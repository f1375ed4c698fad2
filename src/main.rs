// Initialize logging
// Load configuration
// Create database connection pool
// Ingest the genesis document

use genesis_ingest::{config::Config, db, Ingestor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting genesis ingestion");

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let db_pool = db::connection::establish_connection(&config.database_url).await?;

    let ingestor = Ingestor::from_config(db_pool, &config)?;
    let report = ingestor.run(&config.genesis_source).await?;

    tracing::info!(
        "Genesis ingestion for chain {} complete: {} accounts, {} balances, {} contracts",
        report.chain_id,
        report.accounts,
        report.balances,
        report.contracts
    );

    Ok(())
}
