use crate::error::{NotebookError, Result};
use crate::notebook::{normalize_extension, NoteBookOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NOTES_DIR: &str = "~/Notes";
const DEFAULT_EXTENSION: &str = ".txt";

/// Configuration for tvnotes, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TvConfig {
    /// Root directory of the notebook (`~` is expanded when opening)
    #[serde(default = "default_notes_dir")]
    pub notes_dir: PathBuf,

    /// Editor command; falls back to $EDITOR / $VISUAL when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Extension for new notes (e.g. ".txt", ".md")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Extensions recognized as notes when reading the notes directory
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// File and directory names to ignore when reading the notes directory
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

fn default_notes_dir() -> PathBuf {
    PathBuf::from(DEFAULT_NOTES_DIR)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_extensions() -> Vec<String> {
    [
        ".txt", ".text", ".md", ".markdown", ".mdown", ".mdwn", ".mkdn", ".mkd", ".rst",
    ]
    .iter()
    .map(|ext| ext.to_string())
    .collect()
}

fn default_exclude() -> Vec<String> {
    ["src", "backup", "ignore", "tmp", "old"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

impl Default for TvConfig {
    fn default() -> Self {
        Self {
            notes_dir: default_notes_dir(),
            editor: None,
            extension: default_extension(),
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

/// Keys accepted by [`TvConfig::get`] and [`TvConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["notes-dir", "editor", "extension", "extensions", "exclude"];

impl TvConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotebookError::Io)?;
        let mut config: TvConfig =
            serde_json::from_str(&content).map_err(NotebookError::Serialization)?;
        config.normalize();
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotebookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotebookError::Serialization)?;
        fs::write(config_path, content).map_err(NotebookError::Io)?;
        Ok(())
    }

    /// Set the extension for new notes (normalizes to start with a dot)
    pub fn set_extension(&mut self, ext: &str) {
        self.extension = normalize_extension(ext);
    }

    pub fn set_extensions<I: IntoIterator<Item = S>, S: AsRef<str>>(&mut self, exts: I) {
        self.extensions = exts
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();
    }

    /// Current value of `key`, rendered for display.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "notes-dir" => Ok(self.notes_dir.display().to_string()),
            "editor" => Ok(self.editor.clone().unwrap_or_default()),
            "extension" => Ok(self.extension.clone()),
            "extensions" => Ok(self.extensions.join(" ")),
            "exclude" => Ok(self.exclude.join(" ")),
            _ => Err(unknown_key(key)),
        }
    }

    /// Sets `key` from its textual form. List values are comma or space separated.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "notes-dir" => self.notes_dir = PathBuf::from(value.trim()),
            "editor" => {
                let value = value.trim();
                self.editor = (!value.is_empty()).then(|| value.to_string());
            }
            "extension" => self.set_extension(value),
            "extensions" => self.set_extensions(split_list(value)),
            "exclude" => {
                self.exclude = split_list(value).into_iter().map(str::to_string).collect()
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Notebook options for this configuration.
    pub fn notebook_options(&self) -> NoteBookOptions {
        NoteBookOptions::new(&self.notes_dir)
            .with_default_extension(&self.extension)
            .with_extensions(&self.extensions)
            .with_exclude(self.exclude.iter().cloned())
    }

    fn normalize(&mut self) {
        self.extension = normalize_extension(&self.extension);
        let extensions = std::mem::take(&mut self.extensions);
        self.set_extensions(extensions);
    }
}

fn split_list(value: &str) -> Vec<&str> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

fn unknown_key(key: &str) -> NotebookError {
    NotebookError::Api(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
