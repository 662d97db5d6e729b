//! Interactive console player
//!
//! Reads one command per line from stdin and drives the playback controller
//! against a [`SimulatedEngine`]. Bare key names (`space`, `left`, `m`, ...)
//! go through the same shortcut table a graphical player uses.

use crate::engine::SimulatedEngine;
use crate::render::{catalog_line, player_line};
use pulpit_core::{ItemId, PlayableItem};
use pulpit_playback::shortcuts::{shortcut_for, Key, KeyContext};
use pulpit_playback::{
    Command, ErrorKind, PlaybackConfig, PlaybackController, PlaybackSnapshot, PlayerState,
    PlayerView,
};
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Event pump interval
const TICK: Duration = Duration::from_millis(100);

/// Simulated time from load to ready
const LOAD_LATENCY: Duration = Duration::from_millis(400);

const HELP: &str = "\
Commands:
  play <id>      select a message (same id resumes)
  seek <secs>    jump to a position
  vol <0-1>      set volume
  list           show the catalog
  status         show the player
  help           this text
  quit           exit
Keys:
  space, k       play/pause
  left, right    skip backward/forward
  up, down       volume up/down
  m              mute/unmute
  esc            close the player";

/// One parsed console line
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    Play(ItemId),
    Seek(f64),
    Volume(f32),
    List,
    Status,
    Help,
    Quit,
    Key(Key),
}

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Missing argument for `{0}`")]
    MissingArgument(&'static str),

    #[error("Invalid argument for `{command}`: {value}")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },
}

/// Parse a console line; blank lines yield `None`
pub fn parse_input(line: &str) -> Result<Option<ConsoleInput>, InputError> {
    // A lone space is the play/pause key
    if !line.is_empty() && line.trim().is_empty() {
        return Ok(Some(ConsoleInput::Key(Key::Space)));
    }

    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let input = match command {
        "play" | "p" => ConsoleInput::Play(parse_arg("play", arg)?),
        "seek" => ConsoleInput::Seek(parse_arg("seek", arg)?),
        "vol" | "volume" => ConsoleInput::Volume(parse_arg("vol", arg)?),
        "list" | "ls" => ConsoleInput::List,
        "status" => ConsoleInput::Status,
        "help" | "?" => ConsoleInput::Help,
        "quit" | "q" | "exit" => ConsoleInput::Quit,
        other => match Key::from_name(other) {
            Key::Other => return Err(InputError::Unknown(other.to_string())),
            key => ConsoleInput::Key(key),
        },
    };

    Ok(Some(input))
}

fn parse_arg<T: std::str::FromStr>(
    command: &'static str,
    arg: Option<&str>,
) -> Result<T, InputError> {
    let value = arg.ok_or(InputError::MissingArgument(command))?;
    value.parse().map_err(|_| InputError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}

/// What the console reprints on; position ticks alone do not count
#[derive(Debug, Clone, PartialEq)]
struct StatusKey {
    state: PlayerState,
    item: Option<ItemId>,
    volume: f32,
    muted: bool,
    error: Option<ErrorKind>,
}

impl StatusKey {
    fn of(snapshot: &PlaybackSnapshot) -> Self {
        Self {
            state: snapshot.state(),
            item: snapshot.current_item.as_ref().map(|i| i.id),
            volume: snapshot.volume,
            muted: snapshot.is_muted,
            error: snapshot.last_error.as_ref().map(|e| e.kind()),
        }
    }
}

/// Run the console until `quit` or end of input
pub async fn run(
    items: Vec<PlayableItem>,
    config: PlaybackConfig,
    duration: f64,
) -> anyhow::Result<()> {
    let engine = SimulatedEngine::new(duration, LOAD_LATENCY);
    let mut controller = PlaybackController::new(engine, config)?;
    let mut updates = controller.subscribe();
    let mut last_status = StatusKey::of(controller.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(items = items.len(), duration, "Console started");
    println!("{}", HELP);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_input(&line) {
                    Ok(None) => {}
                    Ok(Some(ConsoleInput::Quit)) => break,
                    Ok(Some(input)) => handle_input(&mut controller, &items, input),
                    Err(e) => println!("{}", e),
                }
            }
            _ = ticker.tick() => {
                controller.pump();
            }
        }

        if updates.has_changed().unwrap_or(false) {
            let snapshot = updates.borrow_and_update().clone();
            let status = StatusKey::of(&snapshot);
            if status != last_status {
                print_player(&snapshot);
                last_status = status;
            }
        }
    }

    debug!("Console closing");
    controller.shutdown();
    Ok(())
}

fn handle_input(
    controller: &mut PlaybackController<SimulatedEngine>,
    items: &[PlayableItem],
    input: ConsoleInput,
) {
    match input {
        ConsoleInput::Play(id) => match items.iter().find(|item| item.id == id) {
            Some(item) => controller.execute(Command::Play(item.clone())),
            None => println!("No message with id {}", id),
        },
        ConsoleInput::Seek(time) => controller.execute(Command::Seek(time)),
        ConsoleInput::Volume(volume) => controller.execute(Command::SetVolume(volume)),
        ConsoleInput::List => {
            if items.is_empty() {
                println!("No messages available");
            }
            for item in items {
                println!("{}", catalog_line(item));
            }
        }
        ConsoleInput::Status => print_player(controller.snapshot()),
        ConsoleInput::Help => println!("{}", HELP),
        ConsoleInput::Quit => {}
        ConsoleInput::Key(key) => {
            match shortcut_for(key, controller.snapshot(), KeyContext::default()) {
                Some(command) => controller.execute(command),
                None if controller.snapshot().has_item() => println!("No shortcut for {:?}", key),
                None => println!("Nothing is playing"),
            }
        }
    }
}

fn print_player(snapshot: &PlaybackSnapshot) {
    match PlayerView::from_snapshot(snapshot) {
        Some(view) => println!("{}", player_line(&view)),
        None => println!("[player closed]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_input("play 3"),
            Ok(Some(ConsoleInput::Play(ItemId::new(3))))
        );
        assert_eq!(parse_input("seek 42.5"), Ok(Some(ConsoleInput::Seek(42.5))));
        assert_eq!(parse_input("vol 0.3"), Ok(Some(ConsoleInput::Volume(0.3))));
        assert_eq!(parse_input("  list "), Ok(Some(ConsoleInput::List)));
        assert_eq!(parse_input("q"), Ok(Some(ConsoleInput::Quit)));
    }

    #[test]
    fn parses_key_names() {
        assert_eq!(parse_input("left"), Ok(Some(ConsoleInput::Key(Key::ArrowLeft))));
        assert_eq!(parse_input("m"), Ok(Some(ConsoleInput::Key(Key::Char('m')))));
        assert_eq!(parse_input(" "), Ok(Some(ConsoleInput::Key(Key::Space))));
        assert_eq!(parse_input(""), Ok(None));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            parse_input("play"),
            Err(InputError::MissingArgument("play"))
        );
        assert_eq!(
            parse_input("seek soon"),
            Err(InputError::InvalidArgument {
                command: "seek",
                value: "soon".to_string(),
            })
        );
        assert_eq!(
            parse_input("rewind"),
            Err(InputError::Unknown("rewind".to_string()))
        );
    }

    #[test]
    fn time_only_changes_do_not_reprint() {
        let mut snapshot = PlaybackSnapshot::default();
        let before = StatusKey::of(&snapshot);
        snapshot.current_time = 12.0;
        assert_eq!(StatusKey::of(&snapshot), before);

        snapshot.volume = 0.5;
        assert_ne!(StatusKey::of(&snapshot), before);
    }
}
