//! # tvnotes Architecture
//!
//! tvnotes is a **plain-text note book library**: a directory of text files is
//! the whole database, and the library keeps an in-memory index of it that can be
//! enumerated, extended and searched. The `tv` binary is one small client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, launches the editor    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - Selectors (list indexes, titles) → notes                 │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (notebook.rs, note.rs, search/)                       │
//! │  - NoteBook: scan, add_new, delete, enumerate, search       │
//! │  - Note: one file on disk, read on demand                   │
//! │  - SearchStrategy: pluggable, brute force by default        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Core
//!
//! A [`notebook::NoteBook`] is opened on a root directory. Opening creates the
//! directory if needed, otherwise walks it once and adopts every note file
//! (recognized extension, not hidden, not a backup, not excluded). From then on
//! the notebook only changes through its own operations; it never watches the
//! directory.
//!
//! Notes are never cached: contents and modification times are read from disk
//! every time they're asked for. Searching therefore rereads every note, which
//! keeps results honest and is fast enough for a personal notebook.
//!
//! ## Errors and Diagnostics
//!
//! Operations a caller asked for fail loudly with a [`error::NotebookError`].
//! Problems that must not abort a bulk operation (an unreadable file during a
//! search, an odd entry during the scan) go to an injected
//! [`diagnostics::Diagnostics`] sink instead. The core never installs a logger.
//!
//! ## Module Overview
//!
//! - [`notebook`]: The notebook index and its invariants
//! - [`note`]: A single note file
//! - [`search`]: Search strategies, autocompletion, recency ordering
//! - [`entry`]: Parsing typed text into a new note
//! - [`api`]: The API facade used by clients
//! - [`commands`]: Business logic for each client command
//! - [`config`]: Configuration file
//! - [`editor`]: External editor integration
//! - [`diagnostics`]: Non-fatal problem reporting
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod editor;
pub mod entry;
pub mod error;
pub mod note;
pub mod notebook;
pub mod search;

#[cfg(test)]
pub(crate) mod test_utils;
