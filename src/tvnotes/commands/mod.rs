use crate::config::TvConfig;
use crate::diagnostics::Diagnostic;
use crate::note::Note;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod open;
pub mod paths;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A note as shown to the user: its 1-based position in a listing plus what
/// a client needs to render it, detached from the notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedNote {
    pub index: usize,
    pub title: String,
    pub path: PathBuf,
    /// `None` when the file could not be stat'ed.
    pub modified: Option<DateTime<Utc>>,
}

impl ListedNote {
    pub fn new(index: usize, note: &Note) -> Self {
        Self {
            index,
            title: note.display_title(),
            path: note.abs_path().to_path_buf(),
            modified: note.mtime().ok(),
        }
    }
}

/// Warnings for the problems a notebook ran into while scanning or reading:
/// a count, then one line per problem. Nothing when there were none.
pub fn diagnostic_messages(reports: &[Diagnostic]) -> Vec<CmdMessage> {
    if reports.is_empty() {
        return Vec::new();
    }

    let noun = if reports.len() == 1 { "problem" } else { "problems" };
    let mut messages = vec![CmdMessage::warning(format!(
        "{} {} while reading the notebook:",
        reports.len(),
        noun
    ))];
    messages.extend(
        reports
            .iter()
            .map(|report| CmdMessage::warning(format!("  {}", report))),
    );
    messages
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_notes: Vec<ListedNote>,
    pub affected_notes: Vec<ListedNote>,
    pub note_paths: Vec<PathBuf>,
    pub config: Option<TvConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<ListedNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_note_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.note_paths = paths;
        self
    }

    pub fn with_config(mut self, config: TvConfig) -> Self {
        self.config = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn no_reports_no_messages() {
        assert!(diagnostic_messages(&[]).is_empty());
    }

    #[test]
    fn reports_become_counted_warnings() {
        let reports = vec![
            Diagnostic::UndecodableFilename {
                path: PathBuf::from("notes/bad"),
            },
            Diagnostic::SkippedEntry {
                path: PathBuf::from("notes/locked"),
                reason: "permission denied".into(),
            },
        ];

        let messages = diagnostic_messages(&reports);
        assert_eq!(messages.len(), 3);
        assert!(messages
            .iter()
            .all(|m| matches!(m.level, MessageLevel::Warning)));
        assert_eq!(messages[0].content, "2 problems while reading the notebook:");
        assert_eq!(messages[1].content, "  Could not decode filename: notes/bad");
        assert_eq!(
            messages[2].content,
            "  Skipped notes/locked: permission denied"
        );
    }
}
