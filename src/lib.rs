pub mod cache;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod genesis;
pub mod ingest;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use db::connection;
pub use db::migration;
pub use entities::{EntityManager, GenesisEntity};
pub use error::IngestError;
pub use genesis::{GenesisDocument, GenesisLoader, GenesisSource};
pub use ingest::{IngestReport, Ingestor};
pub use models::{Account, Contract, GenesisBalance};
