use super::SearchStrategy;
use crate::diagnostics::Diagnostics;
use crate::note::Note;

/// Full-text search that reads every note on every call.
///
/// The query is split on whitespace and a note matches when **every** word is
/// found in its display title or in its contents. A word made only of lowercase
/// letters (plus digits/punctuation) matches case-insensitively; a word with any
/// uppercase letter matches exactly. An empty query matches every note.
///
/// Nothing is indexed or cached, which is fine for a personal notebook of a few
/// thousand files.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForceSearch;

impl SearchStrategy for BruteForceSearch {
    fn search<'a>(
        &self,
        notes: &'a [Note],
        query: &str,
        diagnostics: &dyn Diagnostics,
    ) -> Vec<&'a Note> {
        let words: Vec<SearchWord> = query.split_whitespace().map(SearchWord::new).collect();

        notes
            .iter()
            .filter(|note| matches_all(note, &words, diagnostics))
            .collect()
    }
}

struct SearchWord<'q> {
    text: &'q str,
    case_insensitive: bool,
}

impl<'q> SearchWord<'q> {
    fn new(text: &'q str) -> Self {
        Self {
            text,
            case_insensitive: is_lowercase_word(text),
        }
    }

    fn found_in(&self, haystack: &str, haystack_lower: &str) -> bool {
        if self.case_insensitive {
            haystack_lower.contains(self.text)
        } else {
            haystack.contains(self.text)
        }
    }
}

fn matches_all(note: &Note, words: &[SearchWord<'_>], diagnostics: &dyn Diagnostics) -> bool {
    let title = note.display_title();
    let title_lower = title.to_lowercase();

    // Read lazily, at most once per note.
    let mut contents: Option<(String, String)> = None;

    words.iter().all(|word| {
        if word.found_in(&title, &title_lower) {
            return true;
        }
        let (text, lower) = contents.get_or_insert_with(|| {
            let text = note.contents(diagnostics);
            let lower = text.to_lowercase();
            (text, lower)
        });
        word.found_in(text, lower)
    })
}

/// True when the word has a lowercase letter and no uppercase or titlecase ones.
fn is_lowercase_word(word: &str) -> bool {
    word.chars().any(char::is_lowercase) && !word.chars().any(is_upper_or_titlecase)
}

/// Titlecase letters (`ǅ`) are neither upper nor lower but still change when
/// lowercased.
fn is_upper_or_titlecase(c: char) -> bool {
    c.is_uppercase() || (!c.is_lowercase() && !c.to_lowercase().eq(std::iter::once(c)))
}
