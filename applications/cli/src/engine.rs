//! Simulated media engine for the console
//!
//! Behaves like a streaming audio element without producing sound: a load
//! becomes ready after a fixed latency, and the position advances with wall
//! clock time while playing. Every item reports the same duration.

use pulpit_playback::{AudioResource, LoadToken, ResourceEvent, ResourceEventKind};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Minimum wall time between position events
const POSITION_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct SimulatedEngine {
    source: String,
    load: LoadToken,
    duration: f64,
    load_latency: Duration,
    loading_since: Option<Instant>,
    loaded: bool,
    position: f64,
    playing: bool,
    last_advance: Instant,
    last_position_event: Instant,
    volume: f32,
    events: VecDeque<ResourceEvent>,
    released: bool,
}

impl SimulatedEngine {
    pub fn new(duration: f64, load_latency: Duration) -> Self {
        let now = Instant::now();
        Self {
            source: String::new(),
            load: LoadToken::default(),
            duration,
            load_latency,
            loading_since: None,
            loaded: false,
            position: 0.0,
            playing: false,
            last_advance: now,
            last_position_event: now,
            volume: 1.0,
            events: VecDeque::new(),
            released: false,
        }
    }

    fn push(&mut self, kind: ResourceEventKind) {
        self.events.push_back(ResourceEvent::new(self.load, kind));
    }

    /// Bring the simulation forward to `now`
    pub fn advance_to(&mut self, now: Instant) {
        if let Some(since) = self.loading_since {
            if now.saturating_duration_since(since) >= self.load_latency {
                self.loading_since = None;
                self.loaded = true;
                self.push(ResourceEventKind::MetadataLoaded);
                self.push(ResourceEventKind::Ready);
            }
        }

        if self.playing {
            let elapsed = now.saturating_duration_since(self.last_advance);
            self.position += elapsed.as_secs_f64();

            if self.position >= self.duration {
                self.position = self.duration;
                self.playing = false;
                self.push(ResourceEventKind::PositionAdvanced);
                self.push(ResourceEventKind::Paused);
                self.push(ResourceEventKind::Ended);
            } else if now.saturating_duration_since(self.last_position_event) >= POSITION_INTERVAL
            {
                self.last_position_event = now;
                self.push(ResourceEventKind::PositionAdvanced);
            }
        }

        self.last_advance = now;
    }
}

impl AudioResource for SimulatedEngine {
    fn set_source(&mut self, uri: &str) {
        self.source = uri.to_string();
        self.loaded = false;
        self.loading_since = None;
        self.playing = false;
    }

    fn load(&mut self) {
        self.load = self.load.next();
        self.loaded = false;
        self.push(ResourceEventKind::LoadStarted);

        if self.source.trim().is_empty() {
            self.push(ResourceEventKind::Failed {
                reason: "empty source".to_string(),
            });
        } else {
            self.loading_since = Some(Instant::now());
        }
    }

    fn current_load(&self) -> LoadToken {
        self.load
    }

    fn play(&mut self) {
        if !self.loaded {
            self.push(ResourceEventKind::PlayRejected {
                reason: "no media loaded".to_string(),
            });
            return;
        }

        if !self.playing {
            self.playing = true;
            self.last_advance = Instant::now();
            self.push(ResourceEventKind::Started);
        }
    }

    fn pause(&mut self) {
        if self.playing {
            self.advance_to(Instant::now());
            self.playing = false;
            self.push(ResourceEventKind::Paused);
        }
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, seconds: f64) {
        self.position = if self.loaded {
            seconds.clamp(0.0, self.duration)
        } else {
            seconds.max(0.0)
        };
    }

    fn duration(&self) -> Option<f64> {
        self.loaded.then_some(self.duration)
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn poll_event(&mut self) -> Option<ResourceEvent> {
        if self.released {
            return None;
        }

        if self.events.is_empty() {
            self.advance_to(Instant::now());
        }
        self.events.pop_front()
    }

    fn release(&mut self) {
        self.released = true;
        self.playing = false;
        self.loading_since = None;
        self.source.clear();
        self.events.clear();
    }
}
