//! Common helper functions for output formatting.

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

/// Truncates an ID to 8 characters for display.
pub fn truncate_id(id: &str) -> String {
    truncate_chars(id, 8)
}

/// Truncates a string to at most `max_len` characters, ending in "..." when cut.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

fn truncate_chars(s: &str, max_len: usize) -> String {
    s.chars().take(max_len).collect()
}

/// Pads `s` to `width` characters, left-aligned.
///
/// Padding is computed before any coloring so ANSI codes don't skew columns.
pub fn pad(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}

/// Formats a post or comment state, colored by how visible the item is.
pub fn format_state(estado: &str, width: usize, use_colors: bool) -> String {
    let padded = pad(estado, width);
    if !use_colors {
        return padded;
    }
    match estado {
        "publicado" | "aprobado" => padded.green().to_string(),
        "borrador" | "pendiente" => padded.yellow().to_string(),
        "rechazado" => padded.red().to_string(),
        _ => padded.dimmed().to_string(),
    }
}

/// Formats an RFC 3339 timestamp as a UTC date; other strings pass through.
pub fn format_date(datetime: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime) {
        Ok(dt) => dt.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
        Err(_) => datetime.to_string(),
    }
}

/// Formats tags for display.
pub fn format_tags(tags: &[String], max_len: usize) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let joined = tags
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ");

    truncate_str(&joined, max_len)
}
