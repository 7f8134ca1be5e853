//! HTTP client for the remote catalog document.
//!
//! One GET of a fixed URI, no pagination, auth or content negotiation.
//! Transport errors, non-2xx responses and undecodable bodies are mapped to
//! distinct [`LoadFailure`] variants.

use std::time::Duration;

use catalog::Catalog;
use reqwest::Client;
use tracing::{debug, error, info};

use crate::error::LoadFailure;

/// Where the reference voting page loads its nominees from
pub const DEFAULT_ENDPOINT: &str = "https://ph4un00b.github.io/data/30movies.json";

/// Settings for [`CatalogClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// URI of the `{ "movies": [...] }` document
    pub endpoint: String,
    /// Whole-request timeout. `None` leaves timing entirely to the transport.
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl FetchConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Fetches and decodes the catalog document.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    endpoint: String,
}

impl CatalogClient {
    /// Build a client from config.
    ///
    /// Fails only if the HTTP client itself cannot be constructed (e.g. the
    /// TLS backend fails to initialise); that is reported as a transport
    /// failure.
    pub fn new(config: &FetchConfig) -> Result<Self, LoadFailure> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            LoadFailure::Transport(e.to_string())
        })?;

        Ok(Self::with_client(http, config.endpoint.clone()))
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform the GET and decode the body into a validated catalog.
    pub async fn fetch(&self) -> Result<Catalog, LoadFailure> {
        debug!("GET {}", self.endpoint);

        let response = self.http.get(&self.endpoint).send().await.map_err(|e| {
            error!("Transport error while fetching {}: {}", self.endpoint, e);
            LoadFailure::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Catalog source {} answered {}", self.endpoint, status);
            return Err(LoadFailure::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            error!("Transport error while reading body from {}: {}", self.endpoint, e);
            LoadFailure::Transport(e.to_string())
        })?;

        let catalog = catalog::parse_catalog(&body).map_err(|e| {
            error!("Catalog document from {} is malformed: {}", self.endpoint, e);
            LoadFailure::Malformed(e.to_string())
        })?;

        info!("Fetched {} movies from {}", catalog.len(), self.endpoint);
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_reference_data() {
        let config = FetchConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = FetchConfig::new("http://localhost:8080/movies.json")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.endpoint, "http://localhost:8080/movies.json");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));

        let client = CatalogClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/movies.json");
    }
}
