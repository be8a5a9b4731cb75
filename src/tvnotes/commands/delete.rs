use crate::commands::helpers::resolve_selectors;
use crate::commands::{CmdMessage, CmdResult, ListedNote};
use crate::error::Result;
use crate::notebook::NoteBook;
use crate::search::SearchStrategy;

/// Deletes the selected notes and their files.
///
/// Selectors are resolved up front, so indexes refer to the listing as it was
/// before anything was removed. Stops at the first note that can't be deleted;
/// notes deleted before it stay deleted.
pub fn run<S: SearchStrategy, I: AsRef<str>>(
    notebook: &mut NoteBook<S>,
    selectors: &[I],
) -> Result<CmdResult> {
    let targets = resolve_selectors(notebook, selectors)?;
    let mut result = CmdResult::default();

    for (i, note) in targets.iter().enumerate() {
        if !notebook.contains(note) {
            // Selected twice.
            continue;
        }
        let removed = notebook.remove(note)?;
        result.add_message(CmdMessage::success(format!(
            "Note deleted: {}",
            removed.display_title()
        )));
        result.affected_notes.push(ListedNote {
            index: i + 1,
            title: removed.display_title(),
            path: removed.abs_path().to_path_buf(),
            modified: None,
        });
    }

    Ok(result)
}
