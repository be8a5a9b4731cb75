//! # CLI Behavior
//!
//! This is **one possible client** for tvnotes, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Naked Execution (`tv`)
//!
//! Running `tv` with no arguments lists every note, newest first. `tv list
//! QUERY...` narrows the list with the notebook search.
//!
//! ## Open or Create (`tv open QUERY...`)
//!
//! Mirrors typing into a search box and pressing Enter: if a matching note's
//! title starts with the query it is opened, otherwise a note named after the
//! query is created and opened. The editor comes from the config, `$EDITOR` or
//! `$VISUAL`.
//!
//! ## Selectors
//!
//! `rm` and `path` take list indexes (as printed by `tv list`) or full titles
//! such as `proj/idea`. A filtered listing (`tv list QUERY`) shows each note
//! with its number from the unfiltered one, so the printed number always
//! selects the printed note.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (lists, messages, paths)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
