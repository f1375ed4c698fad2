use crate::cache::GenesisCache;
use crate::config::Config;
use crate::error::IngestError;
use crate::genesis::GenesisDocument;
use reqwest::{Client, Url};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Where a genesis document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenesisSource {
    Path(PathBuf),
    Url(Url),
}

impl FromStr for GenesisSource {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IngestError::Config("empty genesis source".to_string()));
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s)
                .map_err(|e| IngestError::Config(format!("invalid genesis URL {}: {}", s, e)))?;
            Ok(GenesisSource::Url(url))
        } else {
            Ok(GenesisSource::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for GenesisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenesisSource::Path(path) => write!(f, "{}", path.display()),
            GenesisSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Loads genesis documents, fetching each remote source at most once.
#[derive(Clone)]
pub struct GenesisLoader {
    client: Client,
    cache: GenesisCache,
}

impl GenesisLoader {
    pub fn new(timeout: Duration) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IngestError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            cache: GenesisCache::new(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, IngestError> {
        Self::new(config.fetch_timeout)
    }

    pub async fn load(&self, source: &GenesisSource) -> Result<Arc<GenesisDocument>, IngestError> {
        match source {
            GenesisSource::Path(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| IngestError::fetch(path.display().to_string(), e))?;
                let document = GenesisDocument::from_slice(&bytes)?;
                info!("Loaded genesis document from {}", path.display());
                Ok(Arc::new(document))
            }
            GenesisSource::Url(url) => {
                if let Some(document) = self.cache.get(url.as_str()).await {
                    return Ok(document);
                }

                let document = Arc::new(self.fetch(url).await?);
                self.cache.insert(url.as_str(), document.clone()).await;
                Ok(document)
            }
        }
    }

    /// Forget a cached remote document. Local paths are never cached.
    pub async fn invalidate(&self, source: &GenesisSource) {
        if let GenesisSource::Url(url) = source {
            self.cache.invalidate(url.as_str()).await;
        }
    }

    async fn fetch(&self, url: &Url) -> Result<GenesisDocument, IngestError> {
        info!("Fetching genesis document from {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| IngestError::fetch(url.as_str(), e))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| IngestError::fetch(url.as_str(), e))?;

        let document = GenesisDocument::from_slice(&bytes)?;
        info!(
            "Fetched genesis document for chain {} ({} bytes)",
            document.chain_id(),
            bytes.len()
        );
        Ok(document)
    }
}
