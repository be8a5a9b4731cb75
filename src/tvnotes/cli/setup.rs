use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// `tv --version`: the bare package version for tagged release builds,
/// `0.3.0@abc1234 2024-01-15 14:30` for anything built from a git checkout.
fn get_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        version_string(
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH"),
            env!("GIT_COMMIT_DATE"),
            env!("IS_RELEASE") == "true",
        )
    })
}

fn version_string(version: &str, git_hash: &str, commit_date: &str, release: bool) -> String {
    if release || git_hash.is_empty() {
        return version.to_string();
    }
    format!("{}@{} {}", version, git_hash, commit_date)
        .trim_end()
        .to_string()
}

#[derive(Parser, Debug)]
#[command(name = "tv", bin_name = "tv", version = get_version())]
#[command(about = "Plain-text note book for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes directory (overrides the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub notes_dir: Option<PathBuf>,

    /// Extension for new notes (overrides the config file)
    #[arg(long, global = true, value_name = "EXT")]
    pub extension: Option<String>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List notes, newest first, optionally filtered by a search query
    #[command(alias = "ls")]
    List {
        /// Search words; every word must match the title or contents
        query: Vec<String>,
    },

    /// Create a new note
    #[command(alias = "n")]
    New {
        /// Title of the note, e.g. "proj/idea" or "proj/idea.md"
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Open the note matching the query in the editor, creating it if needed
    #[command(alias = "o")]
    Open {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Delete notes and their files
    #[command(alias = "rm")]
    Delete {
        /// List indexes or titles (e.g. 1 3 proj/idea)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Print the file path of notes
    Path {
        /// List indexes or titles (e.g. 1 3 proj/idea)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (notes-dir, editor, extension, extensions, exclude)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
