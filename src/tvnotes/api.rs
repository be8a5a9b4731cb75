//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single entry
//! point a client (the `tv` binary, or anything else) uses to drive a notebook.
//!
//! It dispatches to `commands/*.rs` and returns structured [`CmdResult`]s. It does
//! no I/O of its own beyond what the notebook does, and no formatting.
//!
//! `TvApi<S: SearchStrategy>` is generic over the search strategy the notebook
//! was opened with, so alternative strategies flow through unchanged.
//!
//! Configuration is not routed through here: it has to work when the notebook
//! can't be opened, so clients call [`commands::config::run`] directly.

use crate::commands;
use crate::error::Result;
use crate::notebook::NoteBook;
use crate::search::{BruteForceSearch, SearchStrategy};

pub struct TvApi<S: SearchStrategy = BruteForceSearch> {
    notebook: NoteBook<S>,
}

impl<S: SearchStrategy> TvApi<S> {
    pub fn new(notebook: NoteBook<S>) -> Self {
        Self { notebook }
    }

    pub fn list_notes(&self, query: &str) -> Result<CmdResult> {
        commands::list::run(&self.notebook, query)
    }

    pub fn create_note(&mut self, text: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.notebook, text)
    }

    pub fn open_note(&mut self, query: &str) -> Result<CmdResult> {
        commands::open::run(&mut self.notebook, query)
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        commands::delete::run(&mut self.notebook, selectors)
    }

    pub fn note_paths<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        commands::paths::run(&self.notebook, selectors)
    }

    pub fn notebook(&self) -> &NoteBook<S> {
        &self.notebook
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{diagnostic_messages, CmdMessage, CmdResult, ListedNote, MessageLevel};
