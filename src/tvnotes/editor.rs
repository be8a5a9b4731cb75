use crate::error::{NotebookError, Result};
use std::env;
use std::path::Path;
use std::process::Command;

/// Picks the editor command: the configured one, then `$EDITOR`, `$VISUAL`,
/// then the first of vim/vi/nano found on the PATH.
pub fn get_editor(configured: Option<&str>) -> Result<String> {
    if let Some(editor) = configured.map(str::trim).filter(|e| !e.is_empty()) {
        return Ok(editor.to_string());
    }

    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(NotebookError::Api(
        "No editor found. Set $EDITOR or the `editor` config key.".to_string(),
    ))
}

/// Opens `file_path` in `editor` and waits for it to exit.
///
/// The editor command may carry arguments (`"code --wait"`); they are split on
/// whitespace and the path is appended last.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, file_path: P) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| NotebookError::Api("Editor command is empty".to_string()))?;

    log::debug!("Launching '{}' on {}", editor, file_path.as_ref().display());
    let status = Command::new(program)
        .args(parts)
        .arg(file_path.as_ref())
        .status()
        .map_err(|e| NotebookError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(NotebookError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        assert_eq!(get_editor(Some("  micro ")).unwrap(), "micro");
    }

    #[cfg(unix)]
    #[test]
    fn runs_editor_with_arguments() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("note.txt");
        std::fs::write(&file, "").unwrap();

        open_in_editor("true --ignored", &file).unwrap();
        assert!(open_in_editor("false", &file).is_err());
    }

    #[test]
    fn missing_editor_is_an_error() {
        let result = open_in_editor("definitely-not-an-editor-binary", "x.txt");
        assert!(matches!(result, Err(NotebookError::Api(_))));
        assert!(open_in_editor("   ", "x.txt").is_err());
    }
}
