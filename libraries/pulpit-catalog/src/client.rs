//! Catalog HTTP client.

use crate::error::{CatalogError, Result};
use crate::mapping::map_record;
use crate::types::{CatalogConfig, RawAudioRecord};
use pulpit_core::PlayableItem;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the message catalog server.
///
/// # Example
///
/// ```ignore
/// use pulpit_catalog::{CatalogClient, CatalogConfig};
///
/// let client = CatalogClient::new(CatalogConfig::new("https://messages.example.com"))?;
/// let items = client.load_catalog().await;
/// println!("Found {} messages", items.len());
/// ```
pub struct CatalogClient {
    http: Client,
    base_url: String,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Pulpit/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    /// Normalized server URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Active configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetch and map every record, in server order.
    pub async fn fetch_items(&self) -> Result<Vec<PlayableItem>> {
        let url = format!("{}/audios", self.base_url);
        debug!(url = %url, "Fetching catalog");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                CatalogError::ServerUnreachable(e.to_string())
            } else {
                CatalogError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let records: Vec<RawAudioRecord> = response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse catalog response: {}", e))
            })?;

            let items: Vec<PlayableItem> = records
                .into_iter()
                .enumerate()
                .map(|(index, raw)| map_record(index, raw, &self.base_url, &self.config))
                .collect();

            debug!(
                items = items.len(),
                unplayable = items.iter().filter(|i| !i.is_playable()).count(),
                "Fetched catalog"
            );

            Ok(items)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Fetch the catalog, degrading to an empty list on any failure.
    ///
    /// The failure is logged and not surfaced; the browse view simply shows
    /// nothing.
    pub async fn load_catalog(&self) -> Vec<PlayableItem> {
        match self.fetch_items().await {
            Ok(items) => {
                info!(items = items.len(), url = %self.base_url, "Catalog loaded");
                items
            }
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Failed to load catalog");
                Vec::new()
            }
        }
    }
}
