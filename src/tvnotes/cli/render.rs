use chrono::{DateTime, Utc};
use colored::Colorize;
use std::path::PathBuf;
use timeago::Formatter;
use tvnotes::api::{CmdMessage, ListedNote, MessageLevel};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const LEFT_PAD: &str = "    ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn render_note_list(notes: &[ListedNote]) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let mut output = String::new();
    for note in notes {
        let idx_str = format!("{}. ", note.index);
        let time_ago = note
            .modified
            .map(format_time_ago)
            .unwrap_or_else(|| format!("{:>width$}", "?", width = TIME_WIDTH));

        let fixed_width = LEFT_PAD.width() + idx_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title = truncate_to_width(&note.title, available);
        let padding = available.saturating_sub(title.width());

        output.push_str(&format!(
            "{}{}{}{}{}\n",
            LEFT_PAD,
            idx_str.yellow(),
            title,
            " ".repeat(padding),
            time_ago.dimmed()
        ));
    }
    output
}

pub(super) fn render_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("{}\n", path.display()))
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let elapsed = Utc::now()
        .signed_duration_since(timestamp)
        .to_std()
        .unwrap_or_default();
    let text = align_unit(&Formatter::new().convert(elapsed));
    format!("{:>width$}", text, width = TIME_WIDTH)
}

/// Pads the unit of "N unit ago" to the longest unit so every "ago" lands in
/// the same column. Anything else (e.g. "now") is returned as is.
fn align_unit(text: &str) -> String {
    let parts: Vec<&str> = text.split(' ').collect();
    match parts.as_slice() {
        [count, unit, "ago"] => format!("{} {:<7} ago", count, unit),
        _ => text.to_string(),
    }
}
