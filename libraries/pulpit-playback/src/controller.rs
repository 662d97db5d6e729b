//! Playback controller - core orchestration
//!
//! Owns the one audio resource, mediates every command against it, and
//! folds the resource's asynchronous events back into a single snapshot.
//!
//! # Stale loads
//!
//! A track switch retargets the resource synchronously, which moves it to a
//! new [`LoadToken`](crate::LoadToken). Each event carries the token it was
//! queued under and is compared against the token read from the live
//! resource at dispatch time, so a late "ready" from an abandoned load is
//! dropped instead of overwriting the newer selection. Durations and
//! positions are likewise re-read from the resource rather than taken from
//! event payloads.

use crate::{
    command::Command,
    error::{ConfigError, PlaybackError},
    resource::{AudioResource, ResourceEvent, ResourceEventKind},
    types::{PlaybackConfig, PlaybackSnapshot},
    volume::Volume,
};
use pulpit_core::PlayableItem;
use tokio::sync::watch;
use tracing::{debug, info, trace, warn};

/// Why `play()` was requested; decides the error kind of a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayRequest {
    /// Starting (or re-selecting) the current item
    Start,

    /// Resuming after a pause
    Resume,
}

/// Central playback control
///
/// Exactly one controller exists per session. It is the sole owner of the
/// resource `R`; presentation surfaces read [`snapshot`](Self::snapshot) or
/// [`subscribe`](Self::subscribe) and call operations, never touching the
/// resource directly. All methods take `&mut self` and are meant to run on
/// the host's single event loop.
pub struct PlaybackController<R: AudioResource> {
    resource: R,
    config: PlaybackConfig,
    snapshot: PlaybackSnapshot,
    volume: Volume,

    // Playback requested while the current load is still in flight
    play_when_ready: Option<PlayRequest>,

    // play() issued and not yet confirmed or rejected
    pending_play: Option<PlayRequest>,

    publisher: watch::Sender<PlaybackSnapshot>,
    released: bool,
}

impl<R: AudioResource> PlaybackController<R> {
    /// Create a controller around `resource`
    pub fn new(resource: R, config: PlaybackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(resource, config))
    }

    /// Create a controller with [`PlaybackConfig::default`]
    pub fn with_default_config(resource: R) -> Self {
        Self::build(resource, PlaybackConfig::default())
    }

    fn build(mut resource: R, config: PlaybackConfig) -> Self {
        let volume = Volume::new(config.initial_volume);
        resource.set_volume(volume.level());

        let mut snapshot = PlaybackSnapshot::idle(volume.level());
        snapshot.is_muted = volume.is_muted();
        let (publisher, _) = watch::channel(snapshot.clone());

        debug!(
            volume = volume.level(),
            skip_step_secs = config.skip_step_secs,
            "Playback controller created"
        );

        Self {
            resource,
            config,
            snapshot,
            volume,
            play_when_ready: None,
            pending_play: None,
            publisher,
            released: false,
        }
    }

    // ===== Observation =====

    /// Current snapshot
    pub fn snapshot(&self) -> &PlaybackSnapshot {
        &self.snapshot
    }

    /// Receive every published snapshot change
    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.publisher.subscribe()
    }

    /// Active configuration
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    // ===== Operations =====

    /// Select `item`, or resume it when it is already loaded
    ///
    /// Selecting a different item is a track switch: the resource is stopped,
    /// rewound, retargeted and told to load, and the snapshot is updated
    /// optimistically. Playback begins once the resource reports ready. The
    /// player becomes visible either way.
    pub fn play_message(&mut self, item: PlayableItem) {
        if self.released {
            return;
        }

        if self.snapshot.is_current(item.id) {
            debug!(item = %item.id, "Re-selecting current item, resuming");
            self.request_play(PlayRequest::Start);
        } else {
            self.switch_track(item);
        }

        self.snapshot.is_player_visible = true;
        self.publish();
    }

    /// Flip between play and pause
    ///
    /// No-op without a current item. While a load is in flight this only
    /// flips the pending "play when ready" intent.
    pub fn toggle_play_pause(&mut self) {
        if self.released || !self.snapshot.has_item() {
            return;
        }

        if self.snapshot.is_playing || self.play_when_ready.is_some() {
            debug!("Pausing");
            self.play_when_ready = None;
            if self.snapshot.is_playing {
                self.resource.pause();
            }
        } else {
            debug!("Resuming");
            self.request_play(PlayRequest::Resume);
        }

        self.publish();
    }

    /// Move back by the configured skip step, not below 0
    pub fn skip_backward(&mut self) {
        self.skip_by(-self.config.skip_step_secs);
    }

    /// Move forward by the configured skip step, not past the duration
    pub fn skip_forward(&mut self) {
        self.skip_by(self.config.skip_step_secs);
    }

    /// Jump to `time` seconds
    ///
    /// The displayed position updates immediately. Non-finite values are
    /// ignored and negative values become 0. Values past the duration pass
    /// through unchanged; the seek control is expected to limit its range.
    pub fn handle_seek(&mut self, time: f64) {
        if self.released || !self.snapshot.has_item() {
            return;
        }

        if !time.is_finite() {
            warn!(time, "Ignoring seek to non-finite position");
            return;
        }

        let time = time.max(0.0);
        self.resource.set_position(time);
        self.snapshot.current_time = time;
        trace!(time, "Seek");
        self.publish();
    }

    /// Set volume, clamped to 0.0 - 1.0
    ///
    /// 0 mutes; any audible level unmutes.
    pub fn handle_volume_change(&mut self, volume: f32) {
        if self.released {
            return;
        }

        if !self.volume.set_level(volume) {
            warn!("Ignoring NaN volume");
            return;
        }

        self.apply_volume();
    }

    /// Mute, or restore the level that was active before muting
    pub fn toggle_mute(&mut self) {
        if self.released {
            return;
        }

        self.volume.toggle_mute();
        self.apply_volume();
    }

    /// Stop, rewind and return to `Idle`
    pub fn close_player(&mut self) {
        if self.released {
            return;
        }

        if let Some(item) = &self.snapshot.current_item {
            info!(item = %item.id, "Closing player");
        }

        self.resource.pause();
        self.resource.set_position(0.0);
        self.play_when_ready = None;
        self.pending_play = None;

        let mut idle = PlaybackSnapshot::idle(self.volume.level());
        idle.is_muted = self.volume.is_muted();
        self.snapshot = idle;
        self.publish();
    }

    /// Run a [`Command`]
    pub fn execute(&mut self, command: Command) {
        debug!(command = command.name(), "Executing command");

        match command {
            Command::Play(item) => self.play_message(item),
            Command::TogglePlayPause => self.toggle_play_pause(),
            Command::SkipBackward => self.skip_backward(),
            Command::SkipForward => self.skip_forward(),
            Command::Seek(time) => self.handle_seek(time),
            Command::SetVolume(volume) => self.handle_volume_change(volume),
            Command::VolumeUp => {
                let level = self.volume.stepped(self.config.volume_step);
                self.handle_volume_change(level);
            }
            Command::VolumeDown => {
                let level = self.volume.stepped(-self.config.volume_step);
                self.handle_volume_change(level);
            }
            Command::ToggleMute => self.toggle_mute(),
            Command::Close => self.close_player(),
        }
    }

    // ===== Resource events =====

    /// Drain and dispatch every event the resource has queued
    ///
    /// Returns the number of events processed, stale ones included.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while !self.released {
            let Some(event) = self.resource.poll_event() else {
                break;
            };
            self.dispatch(event);
            processed += 1;
        }
        processed
    }

    /// Fold one resource event into the snapshot
    pub fn dispatch(&mut self, event: ResourceEvent) {
        if self.released {
            return;
        }

        if !self.snapshot.has_item() {
            trace!(kind = ?event.kind, "Ignoring resource event while idle");
            return;
        }

        let live = self.resource.current_load();
        if event.load != live {
            debug!(
                event_load = %event.load,
                live_load = %live,
                kind = ?event.kind,
                "Dropping event from abandoned load"
            );
            return;
        }

        match event.kind {
            ResourceEventKind::LoadStarted => {
                self.snapshot.is_loading = true;
                self.snapshot.is_playing = false;
                self.snapshot.last_error = None;
            }
            ResourceEventKind::MetadataLoaded => {
                self.snapshot.duration = seconds(self.resource.duration().unwrap_or(0.0));
                self.snapshot.is_loading = false;
                self.snapshot.last_error = None;
                debug!(duration = self.snapshot.duration, "Metadata loaded");
            }
            ResourceEventKind::Ready => {
                self.snapshot.is_loading = false;
                if let Some(request) = self.play_when_ready.take() {
                    self.pending_play = Some(request);
                    self.resource.play();
                }
            }
            ResourceEventKind::Started => {
                self.snapshot.is_playing = true;
                self.snapshot.is_loading = false;
                self.snapshot.last_error = None;
                self.play_when_ready = None;
                self.pending_play = None;
            }
            ResourceEventKind::Paused => {
                self.snapshot.is_playing = false;
            }
            ResourceEventKind::Ended => {
                self.snapshot.is_playing = false;
                self.snapshot.current_time = 0.0;
                self.resource.set_position(0.0);
                debug!("Reached end of media");
            }
            ResourceEventKind::PositionAdvanced => {
                self.snapshot.current_time = seconds(self.resource.position());
            }
            ResourceEventKind::Failed { reason } => {
                warn!(reason = %reason, "Audio failed to load");
                self.fail(PlaybackError::load(reason));
            }
            ResourceEventKind::PlayRejected { reason } => {
                let error = match self.pending_play.take() {
                    Some(PlayRequest::Resume) => PlaybackError::resume_failed(reason),
                    Some(PlayRequest::Start) | None => PlaybackError::start_failed(reason),
                };
                warn!(kind = %error.kind(), reason = error.detail(), "Playback request rejected");
                self.fail(error);
            }
        }

        self.publish();
    }

    // ===== Teardown =====

    /// Release the resource and end the session
    pub fn shutdown(mut self) {
        self.release_resource();
    }

    fn release_resource(&mut self) {
        if self.released {
            return;
        }

        self.resource.release();
        self.released = true;
        debug!("Audio resource released");
    }

    // ===== Internals =====

    fn switch_track(&mut self, item: PlayableItem) {
        info!(item = %item.id, title = %item.title, "Switching track");

        self.resource.pause();
        self.resource.set_position(0.0);
        self.resource.set_source(&item.audio_uri);
        self.resource.load();

        self.play_when_ready = Some(PlayRequest::Start);
        self.pending_play = None;

        let snapshot = &mut self.snapshot;
        snapshot.current_item = Some(item);
        snapshot.current_time = 0.0;
        snapshot.duration = 0.0;
        snapshot.last_error = None;
        snapshot.is_loading = true;
        snapshot.is_playing = false;
    }

    fn request_play(&mut self, request: PlayRequest) {
        if self.snapshot.is_playing {
            return;
        }

        if self.snapshot.is_loading {
            self.play_when_ready = Some(request);
            return;
        }

        self.pending_play = Some(request);
        self.resource.play();
    }

    fn skip_by(&mut self, delta: f64) {
        if self.released || !self.snapshot.has_item() {
            return;
        }

        let duration = seconds(self.resource.duration().unwrap_or(0.0));
        let target = (seconds(self.resource.position()) + delta).clamp(0.0, duration);

        self.resource.set_position(target);
        self.snapshot.current_time = target;
        trace!(target, duration, "Skip");
        self.publish();
    }

    fn apply_volume(&mut self) {
        self.resource.set_volume(self.volume.level());
        self.snapshot.volume = self.volume.level();
        self.snapshot.is_muted = self.volume.is_muted();
        self.publish();
    }

    fn fail(&mut self, error: PlaybackError) {
        self.snapshot.is_loading = false;
        self.snapshot.is_playing = false;
        self.snapshot.last_error = Some(error);
        self.play_when_ready = None;
        self.pending_play = None;
    }

    fn publish(&self) {
        let snapshot = &self.snapshot;
        let changed = self.publisher.send_if_modified(|current| {
            if current == snapshot {
                false
            } else {
                current.clone_from(snapshot);
                true
            }
        });

        if changed {
            trace!(
                state = ?snapshot.state(),
                time = snapshot.current_time,
                duration = snapshot.duration,
                "Snapshot published"
            );
        }
    }
}

impl<R: AudioResource> Drop for PlaybackController<R> {
    fn drop(&mut self) {
        self.release_resource();
    }
}

/// Engine-reported seconds as a displayable, non-negative value
fn seconds(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
