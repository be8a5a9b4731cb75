//! # Search
//!
//! Searching is a pluggable strategy: [`NoteBook::search`](crate::notebook::NoteBook::search)
//! hands its notes and the raw query to a [`SearchStrategy`] and returns whatever
//! it picks. The default, [`BruteForceSearch`], reads every note on every call.
//! An indexed or fuzzy strategy can be dropped in without touching the notebook.
//!
//! The helpers here ([`autocomplete`], [`sort_by_recency`]) work on a result
//! list and are what an interactive client needs to turn matches into a view.

use crate::diagnostics::Diagnostics;
use crate::note::Note;
use std::cmp::Ordering;

pub mod brute_force;

pub use brute_force::BruteForceSearch;

/// Anything that can pick the notes matching a query.
///
/// Implementations must return a subsequence of `notes`: every returned note
/// comes from the slice and relative order is preserved.
pub trait SearchStrategy {
    fn search<'a>(
        &self,
        notes: &'a [Note],
        query: &str,
        diagnostics: &dyn Diagnostics,
    ) -> Vec<&'a Note>;
}

/// Returns the first note whose display title starts with `query`, ignoring case.
///
/// An empty (or all-whitespace) query never autocompletes.
pub fn autocomplete<'a>(matches: &[&'a Note], query: &str) -> Option<&'a Note> {
    if query.trim().is_empty() {
        return None;
    }
    let typed = query.to_lowercase();
    matches
        .iter()
        .copied()
        .find(|note| note.display_title().to_lowercase().starts_with(&typed))
}

/// Orders notes newest first by modification time.
///
/// Notes whose mtime can't be read go last; ties keep their current order.
pub fn sort_by_recency(notes: &mut [&Note]) {
    let mut keyed: Vec<_> = notes
        .iter()
        .map(|note| (note.mtime().ok(), *note))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    for (slot, (_, note)) in notes.iter_mut().zip(keyed) {
        *slot = note;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestNotebook;
    use std::fs;
    use std::time::{Duration, SystemTime};

    fn set_mtime(note: &Note, secs_ago: u64) {
        let file = fs::OpenOptions::new()
            .write(true)
            .open(note.abs_path())
            .unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(secs_ago))
            .unwrap();
    }

    #[test]
    fn autocomplete_picks_first_prefix_match() {
        let mut env = TestNotebook::new();
        env.notebook.add_new("shopping", None, "").unwrap();
        env.notebook.add_new("Shop hours", None, "").unwrap();
        env.notebook.add_new("workshop", None, "").unwrap();

        let all: Vec<&Note> = env.notebook.iter().collect();
        let picked = autocomplete(&all, "SHOP").unwrap();
        assert_eq!(picked.title(), "shopping");

        let picked = autocomplete(&all[1..], "shop").unwrap();
        assert_eq!(picked.title(), "Shop hours");

        assert!(autocomplete(&all, "hours").is_none());
        assert!(autocomplete(&all, "").is_none());
    }

    #[test]
    fn autocomplete_matches_directory_prefix() {
        let mut env = TestNotebook::new();
        env.notebook.add_new("idea", None, "proj").unwrap();

        let all: Vec<&Note> = env.notebook.iter().collect();
        assert_eq!(autocomplete(&all, "proj/i").unwrap().title(), "idea");
    }

    #[test]
    fn sorts_newest_first() {
        let mut env = TestNotebook::new();
        env.notebook.add_new("old", None, "").unwrap();
        env.notebook.add_new("new", None, "").unwrap();
        env.notebook.add_new("middle", None, "").unwrap();
        set_mtime(&env.notebook[0], 3000);
        set_mtime(&env.notebook[1], 10);
        set_mtime(&env.notebook[2], 600);

        let mut notes: Vec<&Note> = env.notebook.iter().collect();
        sort_by_recency(&mut notes);

        let titles: Vec<&str> = notes.iter().map(|n| n.title()).collect();
        assert_eq!(titles, vec!["new", "middle", "old"]);
    }

    #[test]
    fn missing_files_sort_last() {
        let mut env = TestNotebook::new();
        env.notebook.add_new("vanished", None, "").unwrap();
        env.notebook.add_new("present", None, "").unwrap();
        fs::remove_file(env.notebook[0].abs_path()).unwrap();

        let mut notes: Vec<&Note> = env.notebook.iter().collect();
        sort_by_recency(&mut notes);

        assert_eq!(notes[0].title(), "present");
        assert_eq!(notes[1].title(), "vanished");
    }
}
