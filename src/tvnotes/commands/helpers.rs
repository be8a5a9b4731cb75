use crate::error::{NotebookError, Result};
use crate::note::Note;
use crate::notebook::NoteBook;
use crate::search::{sort_by_recency, SearchStrategy};

/// Every note, newest first. This is the order listing indexes refer to.
pub fn recent_notes<S: SearchStrategy>(notebook: &NoteBook<S>) -> Vec<&Note> {
    let mut notes: Vec<&Note> = notebook.iter().collect();
    sort_by_recency(&mut notes);
    notes
}

/// Resolves user selectors to notes.
///
/// A selector is either a 1-based index into [`recent_notes`] or an exact
/// display title (`dir/title`). A number that is out of range is tried as a
/// title before giving up. Notes are cloned so the caller is free to mutate
/// the notebook afterwards.
pub fn resolve_selectors<S: SearchStrategy, I: AsRef<str>>(
    notebook: &NoteBook<S>,
    selectors: &[I],
) -> Result<Vec<Note>> {
    let listing = recent_notes(notebook);

    selectors
        .iter()
        .map(|selector| {
            let selector = selector.as_ref().trim();
            let by_index = selector
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .and_then(|n| listing.get(n - 1).copied());

            by_index
                .or_else(|| notebook.find_by_display_title(selector))
                .cloned()
                .ok_or_else(|| NotebookError::Api(format!("No note matches {}", selector)))
        })
        .collect()
}
