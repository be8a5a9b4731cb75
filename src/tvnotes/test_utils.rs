use crate::diagnostics::CollectedDiagnostics;
use crate::note::Note;
use crate::notebook::{NoteBook, NoteBookOptions};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

pub struct TestNotebook {
    // Keeps the directory alive until the test is done.
    pub _temp_dir: TempDir,
    pub root: PathBuf,
    pub notebook: NoteBook,
    pub diagnostics: Arc<CollectedDiagnostics>,
}

impl Default for TestNotebook {
    fn default() -> Self {
        Self::new()
    }
}

impl TestNotebook {
    /// An empty notebook in a fresh temp dir, accepting `.txt` (default) and `.md`.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let diagnostics = Arc::new(CollectedDiagnostics::new());
        let notebook = NoteBook::open(Self::options_for(&root, diagnostics.clone()))
            .expect("failed to open notebook");
        Self {
            _temp_dir: temp_dir,
            root,
            notebook,
            diagnostics,
        }
    }

    /// Opens a second notebook over the same directory.
    pub fn reopen(&self) -> NoteBook {
        NoteBook::open(Self::options_for(&self.root, self.diagnostics.clone()))
            .expect("failed to reopen notebook")
    }

    fn options_for(root: &Path, diagnostics: Arc<CollectedDiagnostics>) -> NoteBookOptions {
        NoteBookOptions::new(root)
            .with_extensions([".txt", ".md"])
            .with_diagnostics(diagnostics)
    }
}

/// Sets the note's modification time to `secs` seconds ago.
pub fn backdate(note: &Note, secs: u64) {
    let file = fs::OpenOptions::new()
        .write(true)
        .open(note.abs_path())
        .expect("failed to open note");
    file.set_modified(SystemTime::now() - Duration::from_secs(secs))
        .expect("failed to set mtime");
}
