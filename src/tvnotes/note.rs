use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{NotebookError, Result};
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::hash::{Hash, Hasher};
use std::path::{Component, Path, PathBuf};

/// A note, stored as a plain text file somewhere under a notebook's root.
///
/// Notes are only made by [`NoteBook`](crate::notebook::NoteBook), either while
/// scanning the notebook directory or through `add_new`. The backing file exists
/// from construction on: an existing file is adopted as is, a missing one is
/// created empty.
///
/// Nothing about the file is cached. [`Note::contents`] and [`Note::mtime`] go
/// to disk on every call.
#[derive(Debug, Clone)]
pub struct Note {
    title: String,
    extension: String,
    directory: PathBuf,
    abs_path: PathBuf,
}

impl Note {
    /// Creates (or adopts) the file `root/directory/title+extension`.
    ///
    /// `directory` must already be a clean relative path (no `.` or `..`
    /// components); the notebook normalizes it before calling this.
    pub(crate) fn create(
        root: &Path,
        title: String,
        extension: String,
        directory: PathBuf,
    ) -> Result<Self> {
        let file_name = format!("{}{}", title, extension);
        let abs_path = root.join(&directory).join(file_name);

        if let Some(parent) = abs_path.parent() {
            if !parent.is_dir() {
                log::debug!("'{}' doesn't exist, creating it", parent.display());
                fs::create_dir_all(parent).map_err(|source| NotebookError::NoteCreation {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        // Never truncate or touch an existing file: its contents and mtime belong to the user.
        if !abs_path.is_file() {
            OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&abs_path)
                .map_err(|source| NotebookError::NoteCreation {
                    path: abs_path.clone(),
                    source,
                })?;
        }

        Ok(Self {
            title,
            extension,
            directory,
            abs_path,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renaming is not supported; this always fails.
    pub fn set_title(&mut self, _new_title: &str) -> Result<()> {
        Err(NotebookError::RenameUnsupported(self.title.clone()))
    }

    /// The dot-prefixed extension, or an empty string for extensionless notes.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn file_name(&self) -> String {
        format!("{}{}", self.title, self.extension)
    }

    /// Directory relative to the notebook root. Empty for notes at the root.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn relative_path(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }

    pub fn abs_path(&self) -> &Path {
        &self.abs_path
    }

    /// The title shown to (and searched by) users: `dir/sub/title`, or just
    /// `title` for notes at the root. Always uses `/` as the separator.
    pub fn display_title(&self) -> String {
        if self.directory.as_os_str().is_empty() {
            self.title.clone()
        } else {
            format!("{}/{}", slash_path(&self.directory), self.title)
        }
    }

    /// Reads the whole file, failing if it can't be read or isn't UTF-8.
    pub fn read_contents(&self) -> Result<String> {
        fs::read_to_string(&self.abs_path).map_err(|source| NotebookError::FileAccess {
            path: self.abs_path.clone(),
            source,
        })
    }

    /// Reads the whole file. Read and decode failures are reported to
    /// `diagnostics` and come back as an empty string.
    pub fn contents(&self, diagnostics: &dyn Diagnostics) -> String {
        let bytes = match fs::read(&self.abs_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                diagnostics.report(Diagnostic::UnreadableContents {
                    path: self.abs_path.clone(),
                    reason: e.to_string(),
                });
                return String::new();
            }
        };

        match String::from_utf8(bytes) {
            Ok(contents) => contents,
            Err(e) => {
                diagnostics.report(Diagnostic::UnreadableContents {
                    path: self.abs_path.clone(),
                    reason: format!("could not decode file contents: {}", e.utf8_error()),
                });
                String::new()
            }
        }
    }

    /// Modification time of the backing file.
    ///
    /// Fails with [`NotebookError::FileAccess`] if the file was removed behind
    /// the notebook's back.
    pub fn mtime(&self) -> Result<DateTime<Utc>> {
        fs::metadata(&self.abs_path)
            .and_then(|meta| meta.modified())
            .map(DateTime::<Utc>::from)
            .map_err(|source| NotebookError::FileAccess {
                path: self.abs_path.clone(),
                source,
            })
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.abs_path == other.abs_path
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.abs_path.hash(state);
    }
}

/// Joins the normal components of a relative path with `/`.
pub(crate) fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
