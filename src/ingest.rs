use crate::config::Config;
use crate::entities::EntityManager;
use crate::error::IngestError;
use crate::genesis::{GenesisDocument, GenesisLoader, GenesisSource};
use crate::models::{Account, Contract, GenesisBalance};
use sqlx::SqlitePool;
use tracing::info;

/// Rows newly written by one ingestion run, per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub chain_id: String,
    pub accounts: usize,
    pub balances: usize,
    pub contracts: usize,
}

impl IngestReport {
    pub fn total(&self) -> usize {
        self.accounts + self.balances + self.contracts
    }
}

/// Seeds the store from a genesis document.
///
/// Owns the connection pool for the run and the loader whose cache keeps
/// remote documents from being fetched twice.
pub struct Ingestor {
    pool: SqlitePool,
    loader: GenesisLoader,
    chunk_size: usize,
}

impl Ingestor {
    pub fn new(pool: SqlitePool, loader: GenesisLoader, chunk_size: usize) -> Self {
        Self {
            pool,
            loader,
            chunk_size,
        }
    }

    pub fn from_config(pool: SqlitePool, config: &Config) -> Result<Self, IngestError> {
        Ok(Self::new(
            pool,
            GenesisLoader::from_config(config)?,
            config.bulk_chunk_size,
        ))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn loader(&self) -> &GenesisLoader {
        &self.loader
    }

    pub async fn run(&self, source: &GenesisSource) -> Result<IngestReport, IngestError> {
        let document = self.loader.load(source).await?;
        self.process_genesis(&document).await
    }

    /// Load accounts, then their balances, then contracts.
    ///
    /// Each kind commits on its own; a failure leaves earlier kinds loaded.
    pub async fn process_genesis(
        &self,
        document: &GenesisDocument,
    ) -> Result<IngestReport, IngestError> {
        let chain_id = document.chain_id();
        info!(
            "Processing genesis for chain {} (modules: {})",
            chain_id,
            document.modules().join(", ")
        );

        let accounts = EntityManager::<Account>::new(&self.pool, self.chunk_size)
            .process_genesis(document, chain_id)
            .await?;
        info!("Loaded {} new accounts", accounts);

        let balances = EntityManager::<GenesisBalance>::new(&self.pool, self.chunk_size)
            .process_genesis(document, chain_id)
            .await?;
        info!("Loaded {} new genesis balances", balances);

        let contracts = EntityManager::<Contract>::new(&self.pool, self.chunk_size)
            .process_genesis(document, chain_id)
            .await?;
        info!("Loaded {} new contracts", contracts);

        Ok(IngestReport {
            chain_id: chain_id.to_string(),
            accounts,
            balances,
            contracts,
        })
    }
}
