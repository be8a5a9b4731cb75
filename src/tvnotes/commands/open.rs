use crate::commands::{CmdMessage, CmdResult, ListedNote};
use crate::entry::NewEntry;
use crate::error::{NotebookError, Result};
use crate::note::Note;
use crate::notebook::NoteBook;
use crate::search::{autocomplete, sort_by_recency, SearchStrategy};

/// Picks the note to edit for `query`, creating it if nothing matches.
///
/// 1. The most recent match whose display title starts with the query wins.
/// 2. Otherwise the query is treated as a new note entry; if that note already
///    exists (the query named it with an explicit extension, say) the existing
///    note is used.
///
/// The chosen path is returned in `note_paths`.
pub fn run<S: SearchStrategy>(notebook: &mut NoteBook<S>, query: &str) -> Result<CmdResult> {
    if query.trim().is_empty() {
        return Err(NotebookError::Api("Nothing to open: query is empty".into()));
    }

    let mut matches = notebook.search(query);
    sort_by_recency(&mut matches);
    if let Some(note) = autocomplete(&matches, query) {
        return Ok(opened(note, CmdMessage::info(format!("Opening {}", note.display_title()))));
    }

    let entry = NewEntry::parse(query, notebook.extensions());
    let created = notebook
        .add_new(&entry.title, entry.extension.as_deref(), "")
        .map(|note| note.abs_path().to_path_buf());

    match created {
        Ok(path) => {
            let note = notebook
                .iter()
                .find(|note| note.abs_path() == path)
                .ok_or_else(|| NotebookError::NoteNotFound(path.display().to_string()))?;
            Ok(opened(
                note,
                CmdMessage::success(format!("Note created: {}", note.display_title())),
            ))
        }
        Err(NotebookError::DuplicateNote {
            title,
            extension,
            directory,
        }) => {
            let existing = notebook
                .iter()
                .find(|note| {
                    note.title() == title
                        && note.extension() == extension
                        && note.directory() == directory.as_path()
                })
                .ok_or(NotebookError::NoteNotFound(title))?;
            Ok(opened(
                existing,
                CmdMessage::info(format!("Opening {}", existing.display_title())),
            ))
        }
        Err(e) => Err(e),
    }
}

fn opened(note: &Note, message: CmdMessage) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(message);
    result.note_paths.push(note.abs_path().to_path_buf());
    result.affected_notes.push(ListedNote::new(1, note));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestNotebook;

    #[test]
    fn autocompletes_existing_note() {
        let mut env = TestNotebook::new();
        env.notebook.add_new("shopping list", None, "").unwrap();

        let result = run(&mut env.notebook, "shop").unwrap();
        assert_eq!(result.note_paths, vec![env.root.join("shopping list.txt")]);
        assert_eq!(env.notebook.len(), 1);
    }

    #[test]
    fn creates_when_nothing_matches() {
        let mut env = TestNotebook::new();
        env.notebook.add_new("shopping list", None, "").unwrap();

        let result = run(&mut env.notebook, "proj/new idea").unwrap();
        assert_eq!(
            result.note_paths,
            vec![env.root.join("proj").join("new idea.txt")]
        );
        assert_eq!(env.notebook.len(), 2);
        assert_eq!(result.affected_notes[0].title, "proj/new idea");
    }

    #[test]
    fn explicit_extension_reuses_existing_note() {
        let mut env = TestNotebook::new();
        env.notebook.add_new("readme", Some("md"), "").unwrap();

        // "readme.md" doesn't prefix the display title "readme", so no
        // autocomplete; creating it hits the duplicate and opens it instead.
        let result = run(&mut env.notebook, "readme.md").unwrap();
        assert_eq!(result.note_paths, vec![env.root.join("readme.md")]);
        assert_eq!(env.notebook.len(), 1);
    }

    #[test]
    fn empty_query_is_rejected() {
        let mut env = TestNotebook::new();
        assert!(run(&mut env.notebook, " ").is_err());
    }
}
