use crate::commands::{CmdMessage, CmdResult, ListedNote};
use crate::entry::NewEntry;
use crate::error::Result;
use crate::notebook::NoteBook;
use crate::search::SearchStrategy;

/// Creates a note from text typed by the user, e.g. `proj/idea.md`.
pub fn run<S: SearchStrategy>(notebook: &mut NoteBook<S>, text: &str) -> Result<CmdResult> {
    let entry = NewEntry::parse(text, notebook.extensions());
    let note = notebook.add_new(&entry.title, entry.extension.as_deref(), "")?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created: {}",
        note.display_title()
    )));
    result.note_paths.push(note.abs_path().to_path_buf());
    result.affected_notes.push(ListedNote::new(1, note));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotebookError;
    use crate::test_utils::TestNotebook;

    #[test]
    fn creates_note_in_subdirectory() {
        let mut env = TestNotebook::new();
        let result = run(&mut env.notebook, "proj/idea.md").unwrap();

        assert_eq!(result.affected_notes[0].title, "proj/idea");
        assert!(env.root.join("proj").join("idea.md").is_file());
        assert_eq!(env.notebook[0].extension(), ".md");
    }

    #[test]
    fn uses_default_extension() {
        let mut env = TestNotebook::new();
        run(&mut env.notebook, "plain").unwrap();
        assert!(env.root.join("plain.txt").is_file());
    }

    #[test]
    fn surfaces_duplicates_and_invalid_titles() {
        let mut env = TestNotebook::new();
        run(&mut env.notebook, "twice").unwrap();

        assert!(matches!(
            run(&mut env.notebook, "twice"),
            Err(NotebookError::DuplicateNote { .. })
        ));
        assert!(matches!(
            run(&mut env.notebook, "  "),
            Err(NotebookError::InvalidTitle(_))
        ));
        assert_eq!(env.notebook.len(), 1);
    }
}
