//! Turning free text typed by a user into `add_new` arguments.
//!
//! Users type a note the way they'd search for it: `proj/idea`, or
//! `proj/idea.md` when they want a specific format. The trailing suffix is only
//! taken as the extension when it's one the notebook recognizes, so a title like
//! `v1.2 release` stays whole.

use crate::notebook::normalize_extension;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// Title, possibly containing `/` separators for subdirectories.
    pub title: String,
    /// Explicit extension; `None` means the notebook default.
    pub extension: Option<String>,
}

impl NewEntry {
    pub fn parse(text: &str, recognized: &[String]) -> Self {
        let text = text.trim();
        let path = Path::new(text);

        let suffix = path
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .map(normalize_extension);

        if let Some(ext) = suffix {
            if recognized.contains(&ext) && text.ends_with(ext.as_str()) {
                let title = &text[..text.len() - ext.len()];
                if !title.trim().is_empty() && !title.ends_with('/') {
                    return Self {
                        title: title.to_string(),
                        extension: Some(ext),
                    };
                }
            }
        }

        Self {
            title: text.to_string(),
            extension: None,
        }
    }
}
