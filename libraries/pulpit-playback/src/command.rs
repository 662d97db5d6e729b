//! Controller operations as values
//!
//! Lets adapters (keyboard shortcuts, IPC bridges, the console) describe
//! what they want without holding the controller.

use pulpit_core::PlayableItem;

/// A request for the playback controller
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Select an item (or resume it when already loaded)
    Play(PlayableItem),

    /// Flip between play and pause
    TogglePlayPause,

    /// Move back by the configured skip step
    SkipBackward,

    /// Move forward by the configured skip step
    SkipForward,

    /// Jump to a position in seconds
    Seek(f64),

    /// Set volume (0.0 - 1.0)
    SetVolume(f32),

    /// Raise volume by the configured step
    VolumeUp,

    /// Lower volume by the configured step
    VolumeDown,

    /// Toggle mute
    ToggleMute,

    /// Stop and hide the player
    Close,
}

impl Command {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Play(_) => "play",
            Self::TogglePlayPause => "toggle-play-pause",
            Self::SkipBackward => "skip-backward",
            Self::SkipForward => "skip-forward",
            Self::Seek(_) => "seek",
            Self::SetVolume(_) => "set-volume",
            Self::VolumeUp => "volume-up",
            Self::VolumeDown => "volume-down",
            Self::ToggleMute => "toggle-mute",
            Self::Close => "close",
        }
    }
}
