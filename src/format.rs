//! Display Helpers
//!
//! Korean-locale dates, board id abbreviation and note color classes.

use board_core::NoteColor;
use chrono::{Local, NaiveDateTime, TimeZone, Timelike};

fn local_time(millis: i64) -> Option<NaiveDateTime> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.naive_local())
}

/// `2025년 1월 2일`
pub fn format_date(millis: i64) -> String {
    local_time(millis).map(date_label).unwrap_or_default()
}

/// `2025년 1월 2일 오후 03:04`
pub fn format_date_time(millis: i64) -> String {
    local_time(millis).map(date_time_label).unwrap_or_default()
}

fn date_label(dt: NaiveDateTime) -> String {
    dt.format("%Y년 %-m월 %-d일").to_string()
}

fn date_time_label(dt: NaiveDateTime) -> String {
    let (pm, hour) = dt.hour12();
    format!(
        "{} {} {:02}:{:02}",
        date_label(dt),
        if pm { "오후" } else { "오전" },
        hour,
        dt.minute()
    )
}

/// First 8 characters followed by an ellipsis
pub fn short_board_id(board_id: Option<&str>) -> String {
    match board_id {
        Some(id) => format!("{}...", id.chars().take(8).collect::<String>()),
        None => "—".to_string(),
    }
}

pub fn note_color_class(color: NoteColor) -> &'static str {
    match color {
        NoteColor::Yellow => "note-yellow",
        NoteColor::Blue => "note-blue",
        NoteColor::Green => "note-green",
        NoteColor::Pink => "note-pink",
        NoteColor::Purple => "note-purple",
        NoteColor::Orange => "note-orange",
    }
}
