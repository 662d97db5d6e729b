//! Pulpit Catalog
//!
//! HTTP loader for the list of audio messages.
//!
//! # Features
//!
//! - **Fetch**: `GET {base}/audios`, one request, server order preserved
//! - **Mapping**: raw records become [`PlayableItem`](pulpit_core::PlayableItem)s
//!   with fallbacks for missing titles, thumbnails and audio
//! - **Degradation**: [`CatalogClient::load_catalog`] turns any failure into an
//!   empty catalog
//!
//! # Example
//!
//! ```ignore
//! use pulpit_catalog::{CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::default())?;
//!
//!     // Typed errors
//!     let items = client.fetch_items().await?;
//!     for item in &items {
//!         println!("{} {} ({})", item.id, item.title, item.date);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod mapping;
mod types;

// Re-export main types
pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use mapping::{format_date, map_record};
pub use types::{
    CatalogConfig, RawAudioRecord, DEFAULT_ATTRIBUTION, DEFAULT_BASE_URL, PLACEHOLDER_THUMBNAIL,
};
