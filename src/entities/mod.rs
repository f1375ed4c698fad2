//! Per-kind extraction, deduplication and loading of genesis entities.
//!
//! Every entity kind runs the same read-diff-write sequence through
//! [`EntityManager`]; the kinds differ only in where their records live in
//! the document and how a record becomes a row.

pub mod accounts;
pub mod balances;
pub mod contracts;

use crate::db::{migration, query, BulkWriter, Row, Table};
use crate::error::IngestError;
use crate::genesis::GenesisDocument;
use sqlx::SqlitePool;
use std::collections::HashSet;
use std::marker::PhantomData;
use tracing::{debug, info, warn};

/// An entity kind seeded from the genesis document.
pub trait GenesisEntity: Sized {
    const TABLE: &'static Table;

    /// Candidate records, in document order. May contain duplicates.
    fn extract(document: &GenesisDocument) -> Result<Vec<Self>, IngestError>;

    fn id(&self) -> &str;

    /// Values in [`Self::TABLE`] column order.
    fn into_row(self, chain_id: &str) -> Row;
}

/// Keep the first record for each identifier.
pub fn dedup_by_id<E: GenesisEntity>(records: Vec<E>) -> Vec<E> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.id().to_string()))
        .collect()
}

/// Records whose identifier is not yet persisted.
pub fn missing_from<E: GenesisEntity>(records: Vec<E>, persisted: &HashSet<String>) -> Vec<E> {
    records
        .into_iter()
        .filter(|record| !persisted.contains(record.id()))
        .collect()
}

pub struct EntityManager<'p, E> {
    pool: &'p SqlitePool,
    chunk_size: usize,
    _kind: PhantomData<E>,
}

impl<'p, E: GenesisEntity> EntityManager<'p, E> {
    pub fn new(pool: &'p SqlitePool, chunk_size: usize) -> Self {
        Self {
            pool,
            chunk_size,
            _kind: PhantomData,
        }
    }

    /// Load every record of this kind that is not persisted yet.
    ///
    /// Returns the number of rows written. Running it again against the
    /// same store writes nothing.
    pub async fn process_genesis(
        &self,
        document: &GenesisDocument,
        chain_id: &str,
    ) -> Result<usize, IngestError> {
        let table = E::TABLE;
        migration::ensure_table(self.pool, table).await?;

        let candidates = E::extract(document)?;
        let total = candidates.len();
        let candidates = dedup_by_id(candidates);
        if candidates.len() < total {
            warn!(
                "Genesis lists {} duplicate {} records, keeping first occurrences",
                total - candidates.len(),
                table.name
            );
        }

        let persisted = query::select_ids(self.pool, table).await?;
        let delta = missing_from(candidates, &persisted);
        debug!(
            "{}: {} candidates, {} persisted, {} new",
            table.name,
            total,
            persisted.len(),
            delta.len()
        );

        if delta.is_empty() {
            info!("No new {} to load", table.name);
            return Ok(0);
        }

        let mut writer = BulkWriter::open(self.pool, table, self.chunk_size).await?;
        for record in delta {
            writer.write_row(record.into_row(chain_id)).await?;
        }
        writer.commit().await
    }
}
