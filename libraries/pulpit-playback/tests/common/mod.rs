//! Shared test helpers: a scripted media engine
//!
//! `FakeResource` behaves like an HTML audio element whose asynchronous
//! completions are released by the test through `FakeHandle`.

use pulpit_core::{ItemId, PlayableItem};
use pulpit_playback::{
    AudioResource, LoadToken, PlaybackConfig, PlaybackController, ResourceEvent,
    ResourceEventKind,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Calls made by the controller, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetSource(String),
    Load,
    Play,
    Pause,
    SetPosition(f64),
    SetVolume(f32),
    Release,
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub source: String,
    pub load: LoadToken,
    pub position: f64,
    pub duration: Option<f64>,
    pub volume: f32,
    pub playing: bool,
    pub released: bool,
    pub reject_play: Option<String>,
    pub events: VecDeque<ResourceEvent>,
    pub calls: Vec<Call>,
}

impl FakeState {
    fn push(&mut self, kind: ResourceEventKind) {
        let load = self.load;
        self.events.push_back(ResourceEvent::new(load, kind));
    }
}

pub struct FakeResource {
    state: Rc<RefCell<FakeState>>,
}

impl AudioResource for FakeResource {
    fn set_source(&mut self, uri: &str) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::SetSource(uri.to_string()));
        state.source = uri.to_string();
        state.duration = None;
        state.playing = false;
    }

    fn load(&mut self) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Load);
        state.load = state.load.next();
        state.duration = None;
        state.push(ResourceEventKind::LoadStarted);
    }

    fn current_load(&self) -> LoadToken {
        self.state.borrow().load
    }

    fn play(&mut self) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Play);
        if let Some(reason) = state.reject_play.take() {
            state.push(ResourceEventKind::PlayRejected { reason });
        } else if !state.playing {
            state.playing = true;
            state.push(ResourceEventKind::Started);
        }
    }

    fn pause(&mut self) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Pause);
        if state.playing {
            state.playing = false;
            state.push(ResourceEventKind::Paused);
        }
    }

    fn position(&self) -> f64 {
        self.state.borrow().position
    }

    fn set_position(&mut self, seconds: f64) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::SetPosition(seconds));
        state.position = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.state.borrow().duration
    }

    fn volume(&self) -> f32 {
        self.state.borrow().volume
    }

    fn set_volume(&mut self, volume: f32) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::SetVolume(volume));
        state.volume = volume;
    }

    fn poll_event(&mut self) -> Option<ResourceEvent> {
        let mut state = self.state.borrow_mut();
        if state.released {
            return None;
        }
        state.events.pop_front()
    }

    fn release(&mut self) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Release);
        state.released = true;
        state.playing = false;
        state.source.clear();
        state.events.clear();
    }
}

/// Test-side view of the fake engine
#[derive(Clone)]
pub struct FakeHandle {
    state: Rc<RefCell<FakeState>>,
}

impl FakeHandle {
    /// Metadata and "ready" for the current load
    pub fn finish_load(&self, duration: f64) {
        let mut state = self.state.borrow_mut();
        state.duration = Some(duration);
        state.push(ResourceEventKind::MetadataLoaded);
        state.push(ResourceEventKind::Ready);
    }

    /// Queue an event stamped with the current load
    pub fn emit(&self, kind: ResourceEventKind) {
        self.state.borrow_mut().push(kind);
    }

    /// Queue an event stamped with an arbitrary load
    pub fn emit_for(&self, load: LoadToken, kind: ResourceEventKind) {
        self.state
            .borrow_mut()
            .events
            .push_back(ResourceEvent::new(load, kind));
    }

    /// Let playback run for `seconds`, reaching the end if the duration is known
    pub fn advance(&self, seconds: f64) {
        let mut state = self.state.borrow_mut();
        let mut position = state.position + seconds;
        let ended = state.duration.is_some_and(|d| position >= d);
        if let Some(duration) = state.duration {
            position = position.min(duration);
        }
        state.position = position;
        state.push(ResourceEventKind::PositionAdvanced);
        if ended {
            state.playing = false;
            state.push(ResourceEventKind::Paused);
            state.push(ResourceEventKind::Ended);
        }
    }

    pub fn fail_load(&self, reason: &str) {
        self.emit(ResourceEventKind::Failed {
            reason: reason.to_string(),
        });
    }

    pub fn reject_next_play(&self, reason: &str) {
        self.state.borrow_mut().reject_play = Some(reason.to_string());
    }

    pub fn current_load(&self) -> LoadToken {
        self.state.borrow().load
    }

    pub fn source(&self) -> String {
        self.state.borrow().source.clone()
    }

    pub fn position(&self) -> f64 {
        self.state.borrow().position
    }

    pub fn volume(&self) -> f32 {
        self.state.borrow().volume
    }

    pub fn is_playing(&self) -> bool {
        self.state.borrow().playing
    }

    pub fn is_released(&self) -> bool {
        self.state.borrow().released
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn count(&self, call: &Call) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| *c == call)
            .count()
    }
}

pub fn fake_resource() -> (FakeResource, FakeHandle) {
    let state = Rc::new(RefCell::new(FakeState::default()));
    (
        FakeResource {
            state: Rc::clone(&state),
        },
        FakeHandle { state },
    )
}

pub fn controller() -> (PlaybackController<FakeResource>, FakeHandle) {
    controller_with(PlaybackConfig::default())
}

pub fn controller_with(config: PlaybackConfig) -> (PlaybackController<FakeResource>, FakeHandle) {
    let (resource, handle) = fake_resource();
    let controller = PlaybackController::new(resource, config).expect("valid config");
    (controller, handle)
}

pub fn item(id: u32) -> PlayableItem {
    let mut item = PlayableItem::new(
        ItemId::new(id),
        format!("Message {}", id),
        "Test Speaker",
        format!("https://audio.example/stream/file{}", id),
    );
    item.date = "1/2/2024".to_string();
    item.thumbnail = "https://via.placeholder.com/400".to_string();
    item
}

/// Select `item` and drive it to Playing with the given duration
pub fn start_playing(
    controller: &mut PlaybackController<FakeResource>,
    handle: &FakeHandle,
    item: PlayableItem,
    duration: f64,
) {
    controller.play_message(item);
    controller.pump();
    handle.finish_load(duration);
    controller.pump();
}
