// Configuration for one ingestion run:
// - Database connection string
// - Genesis document source (local path or URL)
// - HTTP fetch timeout
// - Bulk insert chunk size

use crate::error::IngestError;
use crate::genesis::GenesisSource;
use dotenv::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_CHUNK_SIZE: usize = 500;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub genesis_source: GenesisSource,
    pub fetch_timeout: Duration,
    pub bulk_chunk_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, IngestError> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:genesis.db".to_string());
        let genesis_source = env::var("GENESIS_SOURCE")
            .map_err(|_| IngestError::Config("GENESIS_SOURCE is not set".to_string()))?
            .parse()?;
        let fetch_timeout = env::var("FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));
        let bulk_chunk_size = env::var("BULK_CHUNK_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|size: &usize| *size > 0)
            .unwrap_or(DEFAULT_CHUNK_SIZE);

        Ok(Self {
            database_url,
            genesis_source,
            fetch_timeout,
            bulk_chunk_size,
        })
    }
}
