//! # Diagnostics
//!
//! Some failures inside the notebook are not errors for the caller: a file that
//! can't be read during a search, or an entry that can't be adopted during the
//! initial scan. Those are reported to a [`Diagnostics`] sink instead of being
//! returned, so bulk operations stay total over the whole notebook.
//!
//! The core never logs through a global logger on its own. The sink is handed
//! to the [`NoteBook`](crate::notebook::NoteBook) at construction:
//!
//! - [`LogDiagnostics`] (the default) forwards reports to the `log` facade, so
//!   whatever logger the binary installed decides where they go.
//! - [`CollectedDiagnostics`] keeps them in memory for later inspection.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// A non-fatal problem noticed while scanning or reading notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A note's contents could not be read or decoded; treated as empty.
    UnreadableContents { path: PathBuf, reason: String },
    /// A file name that is not valid UTF-8 was found during the scan.
    UndecodableFilename { path: PathBuf },
    /// A directory entry was skipped during the scan.
    SkippedEntry { path: PathBuf, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnreadableContents { path, reason } => {
                write!(f, "Could not read {}: {}", path.display(), reason)
            }
            Diagnostic::UndecodableFilename { path } => {
                write!(f, "Could not decode filename: {}", path.display())
            }
            Diagnostic::SkippedEntry { path, reason } => {
                write!(f, "Skipped {}: {}", path.display(), reason)
            }
        }
    }
}

/// Receiver for [`Diagnostic`] reports.
pub trait Diagnostics: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards every report to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::SkippedEntry { .. } => log::warn!("{}", diagnostic),
            _ => log::error!("{}", diagnostic),
        }
    }
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct CollectedDiagnostics {
    reports: Mutex<Vec<Diagnostic>>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far.
    pub fn reports(&self) -> Vec<Diagnostic> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}
