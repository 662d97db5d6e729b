//! Core types for playback control

use crate::error::{ConfigError, PlaybackError};
use pulpit_core::PlayableItem;
use serde::{Deserialize, Serialize};

/// Complete observable playback state
///
/// Presentation surfaces only ever read this; every change goes through a
/// controller operation or a resource event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Item currently loaded (not necessarily playing)
    pub current_item: Option<PlayableItem>,

    /// Whether the media engine reports audible playback
    pub is_playing: bool,

    /// Whether the sticky player is shown; survives pause and track switch
    pub is_player_visible: bool,

    /// Playback position in seconds
    pub current_time: f64,

    /// Item duration in seconds (0 until metadata is known)
    pub duration: f64,

    /// Output volume (0.0 - 1.0)
    pub volume: f32,

    /// Mute state
    pub is_muted: bool,

    /// A load is in flight
    pub is_loading: bool,

    /// Most recent recovered error
    pub last_error: Option<PlaybackError>,
}

impl PlaybackSnapshot {
    /// Snapshot with nothing loaded
    pub fn idle(volume: f32) -> Self {
        Self {
            current_item: None,
            is_playing: false,
            is_player_visible: false,
            current_time: 0.0,
            duration: 0.0,
            volume,
            is_muted: volume == 0.0,
            is_loading: false,
            last_error: None,
        }
    }

    /// Derived state-machine position
    pub fn state(&self) -> PlayerState {
        if self.current_item.is_none() {
            PlayerState::Idle
        } else if self.last_error.is_some() {
            PlayerState::Error
        } else if self.is_loading {
            PlayerState::Loading
        } else if self.is_playing {
            PlayerState::Playing
        } else {
            PlayerState::Paused
        }
    }

    /// Whether an item is loaded
    pub fn has_item(&self) -> bool {
        self.current_item.is_some()
    }

    /// Whether `id` refers to the loaded item
    pub fn is_current(&self, id: pulpit_core::ItemId) -> bool {
        self.current_item.as_ref().is_some_and(|item| item.id == id)
    }
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        Self::idle(1.0)
    }
}

/// Player state derived from a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// No item loaded
    Idle,

    /// Loading/buffering the current item
    Loading,

    /// Loaded and ready, or paused mid-item
    Paused,

    /// Currently playing
    Playing,

    /// The current item failed; close or select another item
    Error,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Seconds moved by skip forward/backward (default: 10)
    pub skip_step_secs: f64,

    /// Volume change per volume-up/down command (default: 0.1)
    pub volume_step: f32,

    /// Volume at controller construction (0.0 - 1.0, default: 1.0)
    pub initial_volume: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            skip_step_secs: 10.0,
            volume_step: 0.1,
            initial_volume: 1.0,
        }
    }
}

impl PlaybackConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.skip_step_secs.is_finite() || self.skip_step_secs <= 0.0 {
            return Err(ConfigError::InvalidSkipStep(self.skip_step_secs));
        }

        if !(self.volume_step > 0.0 && self.volume_step <= 1.0) {
            return Err(ConfigError::InvalidVolumeStep(self.volume_step));
        }

        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(ConfigError::InvalidInitialVolume(self.initial_volume));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulpit_core::ItemId;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.skip_step_secs, 10.0);
        assert_eq!(config.volume_step, 0.1);
        assert_eq!(config.initial_volume, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_config() {
        let config = PlaybackConfig {
            skip_step_secs: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSkipStep(0.0)));

        let config = PlaybackConfig {
            volume_step: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidVolumeStep(_))
        ));

        let config = PlaybackConfig {
            initial_volume: 1.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidInitialVolume(1.5))
        );
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: PlaybackConfig = serde_json::from_str(r#"{"skip_step_secs": 15.0}"#).unwrap();
        assert_eq!(config.skip_step_secs, 15.0);
        assert_eq!(config.volume_step, 0.1);
    }

    #[test]
    fn derived_state() {
        let mut snapshot = PlaybackSnapshot::default();
        assert_eq!(snapshot.state(), PlayerState::Idle);

        snapshot.current_item = Some(PlayableItem::new(ItemId::new(1), "A", "S", "uri"));
        snapshot.is_loading = true;
        assert_eq!(snapshot.state(), PlayerState::Loading);

        snapshot.is_loading = false;
        assert_eq!(snapshot.state(), PlayerState::Paused);

        snapshot.is_playing = true;
        assert_eq!(snapshot.state(), PlayerState::Playing);

        snapshot.is_playing = false;
        snapshot.last_error = Some(PlaybackError::load("gone"));
        assert_eq!(snapshot.state(), PlayerState::Error);
        assert!(snapshot.is_current(ItemId::new(1)));
        assert!(!snapshot.is_current(ItemId::new(2)));
    }

    #[test]
    fn idle_with_zero_volume_is_muted() {
        assert!(PlaybackSnapshot::idle(0.0).is_muted);
        assert!(!PlaybackSnapshot::idle(0.4).is_muted);
    }
}
