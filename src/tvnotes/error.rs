use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("Notebook directory {} could not be created: {source}", .path.display())]
    NoteBookCreation { path: PathBuf, source: io::Error },

    #[error("Note {} could not be created: {source}", .path.display())]
    NoteCreation { path: PathBuf, source: io::Error },

    #[error("Invalid note title: {0:?}")]
    InvalidTitle(String),

    #[error("Note already in notebook: {}", display_name(.title, .extension, .directory))]
    DuplicateNote {
        title: String,
        extension: String,
        directory: PathBuf,
    },

    #[error("Extension {0:?} is not one of the notebook's extensions")]
    UnrecognizedExtension(String),

    #[error("Could not access {}: {source}", .path.display())]
    FileAccess { path: PathBuf, source: io::Error },

    #[error("Note {} could not be deleted: {source}", .path.display())]
    NoteDeletion { path: PathBuf, source: io::Error },

    #[error("Renaming notes is not supported (note: {0})")]
    RenameUnsupported(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Index {index} is out of range (notebook has {len} notes)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),
}

fn display_name(title: &str, extension: &str, directory: &std::path::Path) -> String {
    if directory.as_os_str().is_empty() {
        format!("{}{}", title, extension)
    } else {
        format!("{}/{}{}", directory.display(), title, extension)
    }
}

pub type Result<T> = std::result::Result<T, NotebookError>;
