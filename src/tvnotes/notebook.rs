//! # NoteBook
//!
//! A [`NoteBook`] is the in-memory index of a directory of plain text notes.
//!
//! Opening a notebook walks its root directory once and adopts every file
//! that looks like a note:
//!
//! - excluded directory names are not descended into, excluded file names are skipped;
//! - hidden files (`.name`) and editor backups (`name~`) are skipped;
//! - only recognized extensions are adopted.
//!
//! After that the notebook never looks at the directory tree again. Notes added
//! through [`NoteBook::add_new`] are appended, notes removed through
//! [`NoteBook::delete`]/[`NoteBook::remove`] are dropped along with their file.
//! Files changed behind the notebook's back are not noticed until the next open.
//!
//! ## Invariants
//!
//! - No two notes share the same (title, extension, directory).
//! - Every note's file lives under [`NoteBook::root`].
//! - Order is scan order followed by insertion order.
//!
//! The notebook is a plain owned value with no interior locking. Share it across
//! threads behind a `Mutex` if needed.

use crate::diagnostics::{Diagnostic, Diagnostics, LogDiagnostics};
use crate::error::{NotebookError, Result};
use crate::note::Note;
use crate::search::{BruteForceSearch, SearchStrategy};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::io;
use std::ops::Index;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

pub const DEFAULT_EXTENSION: &str = ".txt";

/// Settings for opening a [`NoteBook`].
#[derive(Clone)]
pub struct NoteBookOptions {
    root: PathBuf,
    default_extension: String,
    extensions: Vec<String>,
    exclude: Vec<String>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl NoteBookOptions {
    /// Options for a notebook at `root` (`~` is expanded), with `.txt` notes,
    /// no exclusions, and diagnostics sent to the `log` facade.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_extension: DEFAULT_EXTENSION.to_string(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            exclude: Vec::new(),
            diagnostics: Arc::new(LogDiagnostics),
        }
    }

    /// Extension given to new notes when none is asked for.
    pub fn with_default_extension(mut self, ext: &str) -> Self {
        self.default_extension = normalize_extension(ext);
        self
    }

    /// Extensions adopted by the scan and accepted by `add_new`.
    pub fn with_extensions<I, E>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        self
    }

    /// File and directory names ignored by the scan.
    pub fn with_exclude<I, E>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        self.exclude = exclude.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

/// An ordered collection of [`Note`]s kept as plain text files under one root.
pub struct NoteBook<S: SearchStrategy = BruteForceSearch> {
    root: PathBuf,
    default_extension: String,
    extensions: Vec<String>,
    exclude: Vec<String>,
    notes: Vec<Note>,
    strategy: S,
    diagnostics: Arc<dyn Diagnostics>,
}

impl NoteBook<BruteForceSearch> {
    /// Opens (creating if needed) the notebook described by `options`, searched by
    /// [`BruteForceSearch`].
    pub fn open(options: NoteBookOptions) -> Result<Self> {
        Self::open_with_strategy(options, BruteForceSearch)
    }
}

impl<S: SearchStrategy> NoteBook<S> {
    /// Opens (creating if needed) the notebook described by `options`.
    ///
    /// A missing root is created along with its ancestors. An existing root is
    /// scanned recursively and every note file in it is adopted. Entries that
    /// can't be adopted are reported to the diagnostics sink and skipped.
    ///
    /// Fails with [`NotebookError::NoteBookCreation`] if the root can't be
    /// resolved or created, or exists but isn't a directory.
    pub fn open_with_strategy(options: NoteBookOptions, strategy: S) -> Result<Self> {
        let root = resolve_root(&options.root)?;

        let mut extensions = options.extensions;
        if !extensions.contains(&options.default_extension) {
            extensions.push(options.default_extension.clone());
        }

        let mut notebook = Self {
            root,
            default_extension: options.default_extension,
            extensions,
            exclude: options.exclude,
            notes: Vec::new(),
            strategy,
            diagnostics: options.diagnostics,
        };

        if !notebook.root.exists() {
            log::debug!("'{}' doesn't exist, creating it", notebook.root.display());
            fs::create_dir_all(&notebook.root).map_err(|source| {
                NotebookError::NoteBookCreation {
                    path: notebook.root.clone(),
                    source,
                }
            })?;
        } else if !notebook.root.is_dir() {
            return Err(NotebookError::NoteBookCreation {
                path: notebook.root.clone(),
                source: io::Error::other("not a directory"),
            });
        } else {
            notebook.scan();
        }

        Ok(notebook)
    }

    fn scan(&mut self) {
        let found = scan_directory(
            &self.root,
            &self.extensions,
            &self.exclude,
            self.diagnostics.as_ref(),
        );

        for file in found {
            let path = self.root.join(&file.directory).join(&file.file_name);
            let adopted = self
                .insert(file.title, file.extension, file.directory)
                .map(|_| ());
            if let Err(e) = adopted {
                self.diagnostics.report(Diagnostic::SkippedEntry {
                    path,
                    reason: e.to_string(),
                });
            }
        }
        log::debug!(
            "Loaded {} notes from '{}'",
            self.notes.len(),
            self.root.display()
        );
    }

    /// Creates a new note and appends it to the notebook.
    ///
    /// The title is cleaned before use: one leading separator is dropped and
    /// surrounding whitespace trimmed. Separators inside the title place the
    /// note in a subdirectory, so `"programming/rust/lifetimes"` lands in
    /// `programming/rust/` below `subdirectory`.
    ///
    /// `extension` defaults to the notebook's default extension; the dot is
    /// optional.
    ///
    /// Fails with [`NotebookError::InvalidTitle`] when nothing usable is left of
    /// the title (or it tries to climb out of the notebook),
    /// [`NotebookError::UnrecognizedExtension`] for an extension the scan would
    /// not pick up again, [`NotebookError::DuplicateNote`] when the note already
    /// exists, and [`NotebookError::NoteCreation`] when the file can't be made.
    pub fn add_new(
        &mut self,
        title: &str,
        extension: Option<&str>,
        subdirectory: impl AsRef<Path>,
    ) -> Result<&Note> {
        let extension = match extension {
            Some(ext) => normalize_extension(ext),
            None => self.default_extension.clone(),
        };
        let (title, directory) = split_title(title, subdirectory.as_ref())?;

        if !self.extensions.contains(&extension) {
            return Err(NotebookError::UnrecognizedExtension(extension));
        }

        self.insert(title, extension, directory)
    }

    fn insert(&mut self, title: String, extension: String, directory: PathBuf) -> Result<&Note> {
        let exists = self.notes.iter().any(|note| {
            note.title() == title
                && note.extension() == extension
                && note.directory() == directory.as_path()
        });
        if exists {
            return Err(NotebookError::DuplicateNote {
                title,
                extension,
                directory,
            });
        }

        let note = Note::create(&self.root, title, extension, directory)?;
        let index = self.notes.len();
        self.notes.push(note);
        Ok(&self.notes[index])
    }

    /// Returns the notes matching `query`, in notebook order.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        self.strategy
            .search(&self.notes, query, self.diagnostics.as_ref())
    }

    /// Removes the note at `index` and deletes its file.
    ///
    /// The file goes first. If it can't be removed the notebook is left as it
    /// was and [`NotebookError::NoteDeletion`] is returned. A file that is
    /// already gone counts as removed.
    pub fn delete(&mut self, index: usize) -> Result<Note> {
        let len = self.notes.len();
        let note = self
            .notes
            .get(index)
            .ok_or(NotebookError::IndexOutOfRange { index, len })?;

        remove_backing_file(note)?;
        Ok(self.notes.remove(index))
    }

    /// Removes `note` (matched by path) and deletes its file. See [`NoteBook::delete`].
    pub fn remove(&mut self, note: &Note) -> Result<Note> {
        let index = self
            .position(note)
            .ok_or_else(|| NotebookError::NoteNotFound(note.display_title()))?;
        self.delete(index)
    }

    /// Reads a note's contents, reporting failures to this notebook's diagnostics.
    pub fn contents(&self, note: &Note) -> String {
        note.contents(self.diagnostics.as_ref())
    }

    /// Finds the note whose display title (`dir/title`) is exactly `title`.
    pub fn find_by_display_title(&self, title: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.display_title() == title)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn contains(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }

    pub fn position(&self, note: &Note) -> Option<usize> {
        self.notes.iter().position(|n| n == note)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn default_extension(&self) -> &str {
        &self.default_extension
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    pub fn diagnostics(&self) -> &dyn Diagnostics {
        self.diagnostics.as_ref()
    }
}

impl<S: SearchStrategy> Index<usize> for NoteBook<S> {
    type Output = Note;

    fn index(&self, index: usize) -> &Note {
        &self.notes[index]
    }
}

impl<'a, S: SearchStrategy> IntoIterator for &'a NoteBook<S> {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

/// Dot-prefixes an extension. The empty extension stays empty.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

fn resolve_root(path: &Path) -> Result<PathBuf> {
    let creation_error = |source| NotebookError::NoteBookCreation {
        path: path.to_path_buf(),
        source,
    };

    let expanded = expand_home(path).map_err(creation_error)?;
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        let cwd = env::current_dir().map_err(creation_error)?;
        Ok(cwd.join(expanded))
    }
}

/// Expands a leading `~` component to the user's home directory.
pub(crate) fn expand_home(path: &Path) -> io::Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first.to_str() == Some("~") => {
            let base = BaseDirs::new().ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "could not determine home directory")
            })?;
            Ok(base.home_dir().join(components.as_path()))
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Turns a user supplied title and subdirectory into a (title, directory) pair
/// that stays inside the notebook.
fn split_title(raw: &str, subdirectory: &Path) -> Result<(String, PathBuf)> {
    let invalid = || NotebookError::InvalidTitle(raw.to_string());

    let title = raw
        .strip_prefix(std::path::MAIN_SEPARATOR)
        .or_else(|| raw.strip_prefix('/'))
        .unwrap_or(raw)
        .trim();

    let title_path = Path::new(title);
    match title_path.file_stem() {
        Some(stem) if !stem.is_empty() => {}
        _ => return Err(invalid()),
    }

    let mut directory = clean_relative(subdirectory).ok_or_else(invalid)?;
    let mut parts = clean_relative(title_path).ok_or_else(invalid)?;
    let name = parts
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(invalid)?;
    parts.pop();
    if !parts.as_os_str().is_empty() {
        directory.push(parts);
    }

    Ok((name, directory))
}

/// Drops `.` components; `None` if the path is absolute or climbs with `..`.
fn clean_relative(path: &Path) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(clean)
}

fn remove_backing_file(note: &Note) -> Result<()> {
    match fs::remove_file(note.abs_path()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!(
                "'{}' was already gone, dropping it from the notebook",
                note.abs_path().display()
            );
            Ok(())
        }
        Err(source) => Err(NotebookError::NoteDeletion {
            path: note.abs_path().to_path_buf(),
            source,
        }),
    }
}

struct ScannedFile {
    file_name: String,
    title: String,
    extension: String,
    directory: PathBuf,
}

fn scan_directory(
    root: &Path,
    extensions: &[String],
    exclude: &[String],
    diagnostics: &dyn Diagnostics,
) -> Vec<ScannedFile> {
    let is_excluded = |name: &std::ffi::OsStr| {
        name.to_str()
            .is_some_and(|name| exclude.iter().any(|e| e == name))
    };

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !(entry.file_type().is_dir() && is_excluded(entry.file_name())));

    let mut found = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                diagnostics.report(Diagnostic::SkippedEntry {
                    path: e.path().unwrap_or(root).to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if entry.file_type().is_dir() || !entry.path().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            diagnostics.report(Diagnostic::UndecodableFilename {
                path: entry.path().to_path_buf(),
            });
            continue;
        };

        if exclude.iter().any(|e| e == file_name) {
            continue;
        }
        if file_name.starts_with('.') || file_name.ends_with('~') {
            continue;
        }

        let as_path = Path::new(file_name);
        let extension = as_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();
        if !extensions.contains(&extension) {
            continue;
        }

        let title = match as_path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };

        let directory = entry
            .path()
            .strip_prefix(root)
            .ok()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default();

        found.push(ScannedFile {
            file_name: file_name.to_string(),
            title,
            extension,
            directory,
        });
    }
    found
}
