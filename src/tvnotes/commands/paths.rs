use crate::commands::helpers::resolve_selectors;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::notebook::NoteBook;
use crate::search::SearchStrategy;

pub fn run<S: SearchStrategy, I: AsRef<str>>(
    notebook: &NoteBook<S>,
    selectors: &[I],
) -> Result<CmdResult> {
    let notes = resolve_selectors(notebook, selectors)?;
    let paths = notes
        .iter()
        .map(|note| note.abs_path().to_path_buf())
        .collect();
    Ok(CmdResult::default().with_note_paths(paths))
}
