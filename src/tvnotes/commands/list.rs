use crate::commands::helpers::recent_notes;
use crate::commands::{CmdResult, ListedNote};
use crate::error::Result;
use crate::notebook::NoteBook;
use crate::search::SearchStrategy;

/// Notes matching `query`, newest first. An empty query lists everything.
///
/// Indexes always come from the full listing: a note keeps its number whatever
/// the query, which is the number `delete` and `paths` resolve.
pub fn run<S: SearchStrategy>(notebook: &NoteBook<S>, query: &str) -> Result<CmdResult> {
    let matches = notebook.search(query);

    let listed = recent_notes(notebook)
        .into_iter()
        .enumerate()
        .filter(|(_, note)| matches.contains(note))
        .map(|(i, note)| ListedNote::new(i + 1, note))
        .collect();
    Ok(CmdResult::default().with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::delete;
    use crate::test_utils::{backdate, TestNotebook};
    use std::fs;

    #[test]
    fn lists_everything_for_empty_query() {
        let mut env = TestNotebook::new();
        env.notebook.add_new("one", None, "").unwrap();
        env.notebook.add_new("two", None, "sub").unwrap();

        let result = run(&env.notebook, "").unwrap();
        assert_eq!(result.listed_notes.len(), 2);
        let indexes: Vec<usize> = result.listed_notes.iter().map(|n| n.index).collect();
        assert_eq!(indexes, vec![1, 2]);
        assert!(result.listed_notes.iter().all(|n| n.modified.is_some()));
    }

    #[test]
    fn filters_by_query() {
        let mut env = TestNotebook::new();
        env.notebook.add_new("groceries", None, "").unwrap();
        let path = env
            .notebook
            .add_new("idea", None, "proj")
            .unwrap()
            .abs_path()
            .to_path_buf();
        fs::write(&path, "buy a boat").unwrap();

        let result = run(&env.notebook, "boat").unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].title, "proj/idea");
        assert_eq!(result.listed_notes[0].path, path);
    }

    #[test]
    fn filtered_listing_keeps_full_listing_indexes() {
        let mut env = TestNotebook::new();
        env.notebook.add_new("recipes pasta", None, "").unwrap();
        env.notebook.add_new("tax return", None, "").unwrap();
        backdate(&env.notebook[0], 500);
        backdate(&env.notebook[1], 5);

        let result = run(&env.notebook, "pasta").unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].title, "recipes pasta");
        assert_eq!(result.listed_notes[0].index, 2);

        let index = result.listed_notes[0].index.to_string();
        delete::run(&mut env.notebook, &[index]).unwrap();
        assert!(!env.root.join("recipes pasta.txt").exists());
        assert!(env.root.join("tax return.txt").exists());
    }
}
