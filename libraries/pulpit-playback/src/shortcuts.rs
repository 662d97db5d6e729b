//! Keyboard shortcuts
//!
//! Thin adapter from key presses to [`Command`]s. Shortcuts only apply
//! while the player is on screen with an item, and never while the user is
//! typing into a text field.

use crate::{command::Command, types::PlaybackSnapshot};

/// Key press, independent of any UI toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Char(char),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    Other,
}

impl Key {
    /// Parse a key name as delivered by browser/terminal key events
    pub fn from_name(name: &str) -> Self {
        match name {
            " " | "Space" | "space" => Self::Space,
            "ArrowLeft" | "left" => Self::ArrowLeft,
            "ArrowRight" | "right" => Self::ArrowRight,
            "ArrowUp" | "up" => Self::ArrowUp,
            "ArrowDown" | "down" => Self::ArrowDown,
            "Escape" | "Esc" | "esc" => Self::Escape,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Focus state at the time of the key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// Focus is inside a text input or text area
    pub text_input_focused: bool,
}

/// Command bound to `key`, if any applies right now
///
/// | Key | Command |
/// |-----|---------|
/// | Space, `k` | toggle play/pause |
/// | ← / → | skip backward / forward |
/// | ↑ / ↓ | volume up / down |
/// | `m` | toggle mute |
/// | Escape | close |
pub fn shortcut_for(key: Key, snapshot: &PlaybackSnapshot, ctx: KeyContext) -> Option<Command> {
    if ctx.text_input_focused || !snapshot.is_player_visible || !snapshot.has_item() {
        return None;
    }

    match key {
        Key::Space | Key::Char('k') => Some(Command::TogglePlayPause),
        Key::ArrowLeft => Some(Command::SkipBackward),
        Key::ArrowRight => Some(Command::SkipForward),
        Key::ArrowUp => Some(Command::VolumeUp),
        Key::ArrowDown => Some(Command::VolumeDown),
        Key::Char('m') => Some(Command::ToggleMute),
        Key::Escape => Some(Command::Close),
        Key::Char(_) | Key::Other => None,
    }
}
