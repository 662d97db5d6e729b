//! Platform-agnostic audio resource trait
//!
//! Abstracts the platform media engine (an HTML audio element, a native
//! player, a simulated engine in tests). The controller owns exactly one
//! resource for its whole lifetime and retargets it on every track switch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one load started on a resource
///
/// Every call to [`AudioResource::load`] moves the resource to a fresh
/// token. Events are stamped with the token current when the engine queued
/// them, so completions of an abandoned load can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct LoadToken(u64);

impl LoadToken {
    /// Create a token from a raw counter value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The token issued after this one
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Get the inner value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LoadToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "load#{}", self.0)
    }
}

/// Something the media engine reports asynchronously
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResourceEventKind {
    /// Playback actually started
    Started,

    /// Playback paused
    Paused,

    /// Reached end of media
    Ended,

    /// Playback position moved; read the live position from the resource
    PositionAdvanced,

    /// Duration became known; read it from the resource
    MetadataLoaded,

    /// A load began
    LoadStarted,

    /// Enough data buffered to start playback
    Ready,

    /// Load or decode failure
    Failed { reason: String },

    /// A `play()` request was refused (autoplay policy, aborted request)
    PlayRejected { reason: String },
}

/// Event stamped with the load it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEvent {
    /// Load that was current when the engine queued the event
    pub load: LoadToken,

    /// What happened
    pub kind: ResourceEventKind,
}

impl ResourceEvent {
    /// Create an event for `load`
    pub fn new(load: LoadToken, kind: ResourceEventKind) -> Self {
        Self { load, kind }
    }
}

/// Platform media engine
///
/// Implementors never block: `load` and `play` are fire-and-forget and their
/// outcome arrives later as a [`ResourceEvent`] (either queued for
/// [`AudioResource::poll_event`] or forwarded by the host to
/// `PlaybackController::dispatch`).
pub trait AudioResource {
    /// Retarget the resource; abandons whatever load was in flight
    fn set_source(&mut self, uri: &str);

    /// Begin loading the current source and issue a new [`LoadToken`]
    fn load(&mut self);

    /// Token of the most recent load
    fn current_load(&self) -> LoadToken;

    /// Request playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Current position in seconds
    fn position(&self) -> f64;

    /// Move the playback position
    fn set_position(&mut self, seconds: f64);

    /// Duration in seconds, once metadata is known
    fn duration(&self) -> Option<f64>;

    /// Output volume (0.0 - 1.0)
    fn volume(&self) -> f32;

    /// Set output volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32);

    /// Next queued event, if any
    fn poll_event(&mut self) -> Option<ResourceEvent>;

    /// Stop, clear the source, and detach all event delivery
    fn release(&mut self);
}
