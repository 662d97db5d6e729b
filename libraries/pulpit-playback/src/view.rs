//! Player view-model
//!
//! Everything a compact or expanded player surface needs to render, derived
//! from a [`PlaybackSnapshot`] in one place so every surface agrees on what
//! is enabled and what the secondary line says.

use crate::types::PlaybackSnapshot;
use pulpit_core::format_time;
use serde::Serialize;

/// Secondary line shown while loading
pub const LOADING_TEXT: &str = "Loading...";

/// Render-ready player state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub title: String,

    /// Loading text, error message, or attribution, in that priority
    pub secondary_line: String,

    pub thumbnail: String,

    /// Play/pause, skips and the seek bar
    pub controls_enabled: bool,

    /// Always true; closing is allowed in every state
    pub close_enabled: bool,

    pub is_playing: bool,
    pub is_loading: bool,
    pub has_error: bool,

    /// `M:SS`
    pub elapsed: String,

    /// `M:SS`
    pub total: String,

    /// Fraction of the item played, 0.0 - 1.0
    pub progress: f64,

    pub volume: f32,

    /// Muted, or volume dragged to 0
    pub shows_muted_icon: bool,

    /// Screen-reader announcement
    pub announcement: String,

    pub download_uri: String,
    pub download_file_name: String,
}

impl PlayerView {
    /// Build the view, or `None` when the player should not render
    pub fn from_snapshot(snapshot: &PlaybackSnapshot) -> Option<Self> {
        if !snapshot.is_player_visible {
            return None;
        }
        let item = snapshot.current_item.as_ref()?;

        let secondary_line = if snapshot.is_loading {
            LOADING_TEXT.to_string()
        } else if let Some(error) = &snapshot.last_error {
            error.to_string()
        } else {
            item.attribution.clone()
        };

        let progress = if snapshot.duration > 0.0 {
            (snapshot.current_time / snapshot.duration).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let announcement = if snapshot.is_playing {
            format!("Playing {}", item.title)
        } else {
            format!("Paused {}", item.title)
        };

        Some(Self {
            title: item.title.clone(),
            secondary_line,
            thumbnail: item.thumbnail.clone(),
            controls_enabled: !snapshot.is_loading && snapshot.last_error.is_none(),
            close_enabled: true,
            is_playing: snapshot.is_playing,
            is_loading: snapshot.is_loading,
            has_error: snapshot.last_error.is_some(),
            elapsed: format_time(snapshot.current_time),
            total: format_time(snapshot.duration),
            progress,
            volume: snapshot.volume,
            shows_muted_icon: snapshot.is_muted || snapshot.volume == 0.0,
            announcement,
            download_uri: item.audio_uri.clone(),
            download_file_name: item.download_file_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaybackError;
    use pulpit_core::{ItemId, PlayableItem};

    fn snapshot_with_item() -> PlaybackSnapshot {
        let mut snapshot = PlaybackSnapshot::default();
        snapshot.current_item = Some(PlayableItem::new(
            ItemId::new(4),
            "Walking in Love",
            "Pastor Ann",
            "https://audio.example/stream/abc",
        ));
        snapshot.is_player_visible = true;
        snapshot
    }

    #[test]
    fn hidden_without_item_or_visibility() {
        assert!(PlayerView::from_snapshot(&PlaybackSnapshot::default()).is_none());

        let mut snapshot = snapshot_with_item();
        snapshot.is_player_visible = false;
        assert!(PlayerView::from_snapshot(&snapshot).is_none());
    }

    #[test]
    fn secondary_line_priority() {
        let mut snapshot = snapshot_with_item();
        let view = PlayerView::from_snapshot(&snapshot).unwrap();
        assert_eq!(view.secondary_line, "Pastor Ann");
        assert!(view.controls_enabled);

        snapshot.last_error = Some(PlaybackError::load("404"));
        let view = PlayerView::from_snapshot(&snapshot).unwrap();
        assert_eq!(view.secondary_line, "Unable to load audio. Please try again.");
        assert!(!view.controls_enabled);
        assert!(view.close_enabled);

        snapshot.is_loading = true;
        let view = PlayerView::from_snapshot(&snapshot).unwrap();
        assert_eq!(view.secondary_line, LOADING_TEXT);
        assert!(!view.controls_enabled);
        assert!(view.close_enabled);
    }

    #[test]
    fn progress_and_times() {
        let mut snapshot = snapshot_with_item();
        snapshot.current_time = 45.0;
        snapshot.duration = 180.0;

        let view = PlayerView::from_snapshot(&snapshot).unwrap();
        assert_eq!(view.elapsed, "0:45");
        assert_eq!(view.total, "3:00");
        assert!((view.progress - 0.25).abs() < f64::EPSILON);

        // Seek past the end is passed through by the controller; the bar pins at full
        snapshot.current_time = 200.0;
        let view = PlayerView::from_snapshot(&snapshot).unwrap();
        assert_eq!(view.progress, 1.0);

        snapshot.duration = 0.0;
        let view = PlayerView::from_snapshot(&snapshot).unwrap();
        assert_eq!(view.progress, 0.0);
    }

    #[test]
    fn muted_icon_and_announcement() {
        let mut snapshot = snapshot_with_item();
        snapshot.volume = 0.0;
        snapshot.is_playing = true;

        let view = PlayerView::from_snapshot(&snapshot).unwrap();
        assert!(view.shows_muted_icon);
        assert_eq!(view.announcement, "Playing Walking in Love");
        assert_eq!(view.download_file_name, "Walking in Love - Pastor Ann.mp3");
    }
}
