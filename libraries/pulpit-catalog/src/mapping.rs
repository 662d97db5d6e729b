//! Raw record to [`PlayableItem`] mapping.

use crate::types::{CatalogConfig, RawAudioRecord};
use chrono::{DateTime, NaiveDate, Utc};
use pulpit_core::{ItemId, PlayableItem};

const UNTITLED: &str = "Untitled";

/// Map the record at zero-based `index` in the server response.
///
/// `base_url` must already be normalized (no trailing slash).
pub fn map_record(
    index: usize,
    raw: RawAudioRecord,
    base_url: &str,
    config: &CatalogConfig,
) -> PlayableItem {
    let title = non_empty(raw.title).unwrap_or_else(|| UNTITLED.to_string());
    let audio_uri = non_empty(raw.file_id)
        .map(|file_id| format!("{}/stream/{}", base_url, file_id))
        .unwrap_or_default();

    let mut item = PlayableItem::new(
        ItemId::from_index(index),
        title,
        config.attribution.clone(),
        audio_uri,
    );
    item.date = raw
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_default();
    item.thumbnail =
        non_empty(raw.thumbnail).unwrap_or_else(|| config.placeholder_thumbnail.clone());
    item.download_link = non_empty(raw.drive_link);
    item
}

/// Render a timestamp as `M/D/YYYY` in UTC.
///
/// Accepts RFC 3339 or a bare `YYYY-MM-DD`; anything else is returned as-is.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.with_timezone(&Utc).format("%-m/%-d/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y").to_string();
    }

    raw.to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
