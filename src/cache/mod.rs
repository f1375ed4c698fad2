//! Fetch-once cache for remote genesis documents, backed by Moka.

use crate::genesis::GenesisDocument;
use moka::future::Cache;
use std::sync::Arc;
use tracing::debug;

/// Parsed documents keyed by the URL they were fetched from.
///
/// The cache is unbounded and entries never expire: a document stays cached
/// for the lifetime of the owner unless explicitly invalidated.
#[derive(Clone)]
pub struct GenesisCache {
    cache: Cache<String, Arc<GenesisDocument>>,
}

impl GenesisCache {
    pub fn new() -> Self {
        let cache = Cache::builder().build();

        Self { cache }
    }

    pub async fn get(&self, url: &str) -> Option<Arc<GenesisDocument>> {
        let result = self.cache.get(url).await;
        if result.is_some() {
            debug!("Genesis cache hit for {}", url);
        } else {
            debug!("Genesis cache miss for {}", url);
        }
        result
    }

    pub async fn insert(&self, url: &str, document: Arc<GenesisDocument>) {
        self.cache.insert(url.to_string(), document).await;
        debug!("Cached genesis document from {}", url);
    }

    /// Drop the cached document so the next load fetches it again.
    pub async fn invalidate(&self, url: &str) {
        self.cache.invalidate(url).await;
        debug!("Invalidated cached genesis document from {}", url);
    }
}

impl Default for GenesisCache {
    fn default() -> Self {
        Self::new()
    }
}
