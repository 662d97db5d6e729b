use super::ItemId;
use serde::{Deserialize, Serialize};

/// One audio message from the catalog
///
/// Items are produced wholesale by the catalog loader and never mutated
/// afterwards; the playback controller only clones and compares them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayableItem {
    /// Stable identifier within a session
    pub id: ItemId,

    /// Display title
    pub title: String,

    /// Speaker / author label
    pub attribution: String,

    /// Publish date, already formatted for display
    pub date: String,

    /// Thumbnail image reference
    pub thumbnail: String,

    /// Audio location handed to the media engine (empty = unplayable)
    pub audio_uri: String,

    /// External download link, when the source provides one
    pub download_link: Option<String>,
}

impl PlayableItem {
    /// Create an item with empty date/thumbnail and no download link
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        attribution: impl Into<String>,
        audio_uri: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            attribution: attribution.into(),
            date: String::new(),
            thumbnail: String::new(),
            audio_uri: audio_uri.into(),
            download_link: None,
        }
    }

    /// Whether the item has an audio location at all
    pub fn is_playable(&self) -> bool {
        !self.audio_uri.trim().is_empty()
    }

    /// Suggested file name when saving the audio locally
    pub fn download_file_name(&self) -> String {
        format!("{} - {}.mp3", self.title, self.attribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_uri_is_not_playable() {
        let item = PlayableItem::new(ItemId::new(1), "Untitled", "Speaker", "");
        assert!(!item.is_playable());

        let item = PlayableItem::new(ItemId::new(2), "Faith", "Speaker", "https://a/stream/x");
        assert!(item.is_playable());
    }

    #[test]
    fn download_file_name_combines_title_and_attribution() {
        let item = PlayableItem::new(ItemId::new(1), "Faith", "Pastor Ann", "https://a/b");
        assert_eq!(item.download_file_name(), "Faith - Pastor Ann.mp3");
    }
}
