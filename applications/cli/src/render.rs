//! Plain-text rendering for catalog items and the player

use pulpit_core::PlayableItem;
use pulpit_playback::PlayerView;
use std::fmt::Write;

const BAR_WIDTH: usize = 24;

/// One row of `pulpit list`
pub fn catalog_line(item: &PlayableItem) -> String {
    let mut line = format!("{:>4}  {:<10}  {}", item.id.get(), item.date, item.title);
    if !item.is_playable() {
        line.push_str("  [no audio]");
    }
    line
}

/// Full details for `pulpit show`
pub fn item_details(item: &PlayableItem) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Id:        {}", item.id);
    let _ = writeln!(out, "Title:     {}", item.title);
    let _ = writeln!(out, "Speaker:   {}", item.attribution);
    let _ = writeln!(out, "Date:      {}", item.date);
    let _ = writeln!(out, "Thumbnail: {}", item.thumbnail);
    let _ = writeln!(
        out,
        "Audio:     {}",
        if item.is_playable() {
            item.audio_uri.as_str()
        } else {
            "(none)"
        }
    );
    if let Some(link) = &item.download_link {
        let _ = writeln!(out, "Download:  {}", link);
    }
    let _ = write!(out, "Save as:   {}", item.download_file_name());
    out
}

/// Single status line for the console player
pub fn player_line(view: &PlayerView) -> String {
    let state = if view.is_loading {
        "..."
    } else if view.has_error {
        "!!"
    } else if view.is_playing {
        ">"
    } else {
        "||"
    };

    let volume = if view.shows_muted_icon {
        "muted".to_string()
    } else {
        format!("vol {:>3}%", (view.volume * 100.0).round() as u32)
    };

    format!(
        "[{:>3}] {} - {}  {} {} {}  {}",
        state,
        view.title,
        view.secondary_line,
        view.elapsed,
        progress_bar(view.progress),
        view.total,
        volume
    )
}

fn progress_bar(progress: f64) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("|{}{}|", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
