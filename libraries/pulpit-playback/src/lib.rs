//! Pulpit - Playback Control
//!
//! Platform-agnostic playback control for Pulpit.
//!
//! This crate provides:
//! - One controller owning one audio resource for the whole session
//! - Track switching that drops completions of abandoned loads
//! - Volume control (linear 0.0-1.0, mute with level memory)
//! - Seek and fixed-step skipping
//! - A snapshot any number of surfaces can read or subscribe to
//! - Keyboard shortcut mapping and a render-ready player view
//!
//! # Architecture
//!
//! `pulpit-playback` is completely platform-agnostic:
//! - No dependency on a media engine (HTML audio, native players)
//! - No dependency on HTTP or the catalog
//! - No UI toolkit
//!
//! The media engine is provided via the [`AudioResource`] trait. Everything
//! runs on the host's single event loop: operations and resource events are
//! applied through `&mut self`, with no locks.
//!
//! # Example: Platform Integration
//!
//! ```rust
//! use pulpit_core::{ItemId, PlayableItem};
//! use pulpit_playback::{AudioResource, LoadToken, PlaybackController, ResourceEvent};
//!
//! // Implement AudioResource for your platform
//! #[derive(Default)]
//! struct MyEngine {
//!     load: LoadToken,
//!     volume: f32,
//!     // ... platform-specific player handle
//! }
//!
//! impl AudioResource for MyEngine {
//!     fn set_source(&mut self, _uri: &str) {}
//!     fn load(&mut self) { self.load = self.load.next(); }
//!     fn current_load(&self) -> LoadToken { self.load }
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn position(&self) -> f64 { 0.0 }
//!     fn set_position(&mut self, _seconds: f64) {}
//!     fn duration(&self) -> Option<f64> { None }
//!     fn volume(&self) -> f32 { self.volume }
//!     fn set_volume(&mut self, volume: f32) { self.volume = volume; }
//!     fn poll_event(&mut self) -> Option<ResourceEvent> { None }
//!     fn release(&mut self) {}
//! }
//!
//! let mut controller = PlaybackController::with_default_config(MyEngine::default());
//! let surface = controller.subscribe();
//!
//! controller.play_message(PlayableItem::new(ItemId::new(1), "Grace", "Speaker", "https://a/1.mp3"));
//! assert!(controller.snapshot().is_loading);
//! assert!(surface.borrow().is_player_visible);
//!
//! // In the host event loop
//! controller.pump();
//! ```

mod command;
mod controller;
mod error;
mod resource;
pub mod shortcuts;
pub mod types;
pub mod view;
mod volume;

// Public exports
pub use command::Command;
pub use controller::PlaybackController;
pub use error::{ConfigError, ErrorKind, PlaybackError};
pub use resource::{AudioResource, LoadToken, ResourceEvent, ResourceEventKind};
pub use types::{PlaybackConfig, PlaybackSnapshot, PlayerState};
pub use view::PlayerView;
pub use volume::Volume;
