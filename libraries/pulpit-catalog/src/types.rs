//! Types for the catalog API.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default catalog server
pub const DEFAULT_BASE_URL: &str = "https://messagefetcher-script.onrender.com";

/// Speaker shown for every item; the API does not carry one
pub const DEFAULT_ATTRIBUTION: &str = "Apostle Joseph Ibrahim";

/// Thumbnail used when a record has none
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/400";

/// Catalog connection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Server base URL (e.g., "https://messages.example.com")
    pub base_url: String,

    /// Attribution label applied to every item
    pub attribution: String,

    /// Thumbnail for records without one
    pub placeholder_thumbnail: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Create a config for the given server, other fields at their defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            placeholder_thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// One audio record as returned by `GET /audios`.
///
/// Every field is optional on the wire; empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAudioRecord {
    #[serde(default)]
    pub title: Option<String>,

    /// Upload timestamp, normally RFC 3339
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub thumbnail: Option<String>,

    /// Storage file id, streamed from `{base}/stream/{file_id}`
    #[serde(default)]
    pub file_id: Option<String>,

    /// Shareable link for downloading the original file
    #[serde(default)]
    pub drive_link: Option<String>,
}
