//! Callback execution (--on-select option)
//!
//! Runs an external command whenever a file row is selected.
//! Supports placeholder expansion for the selected path.

use std::path::Path;
use std::process::Command;

use crate::core::{SelectedFile, SelectionSink};

/// Placeholders for callback command expansion
pub mod placeholder {
    /// Full path: src/app/main.ts
    pub const PATH: &str = "{path}";
    /// Directory: src/app
    pub const DIR: &str = "{dir}";
    /// Filename with extension: main.ts
    pub const NAME: &str = "{name}";
    /// Filename without extension: main
    pub const STEM: &str = "{stem}";
    /// Extension only: ts
    pub const EXT: &str = "{ext}";
}

/// Callback configuration
#[derive(Debug, Clone)]
pub struct Callback {
    /// Command template with placeholders
    command: String,
}

impl Callback {
    /// Create a new callback with the given command template
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Command template
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Expand placeholders in command template
    pub fn expand(&self, path: &str) -> String {
        let p = Path::new(path);
        let dir_str = p
            .parent()
            .map(|d| d.to_string_lossy().to_string())
            .unwrap_or_default();
        let name_str = p
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let stem_str = p
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let ext_str = p
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();

        self.command
            .replace(placeholder::PATH, &shell_escape(path))
            .replace(placeholder::DIR, &shell_escape(&dir_str))
            .replace(placeholder::NAME, &shell_escape(&name_str))
            .replace(placeholder::STEM, &shell_escape(&stem_str))
            .replace(placeholder::EXT, &shell_escape(&ext_str))
    }

    /// Execute callback for the given path and wait for it
    pub fn execute(&self, path: &str) -> anyhow::Result<CallbackResult> {
        let expanded = self.expand(path);

        let output = Command::new("sh").arg("-c").arg(&expanded).output()?;
        Ok(CallbackResult {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

impl SelectionSink for Callback {
    fn on_file_selected(&mut self, selected: &SelectedFile) {
        match self.execute(&selected.path) {
            Ok(result) if result.success => {
                tracing::debug!(path = %selected.path, "on-select callback finished");
            }
            Ok(result) => {
                tracing::warn!(
                    path = %selected.path,
                    exit_code = ?result.exit_code,
                    stderr = %result.stderr.trim(),
                    "on-select callback failed"
                );
            }
            Err(e) => {
                tracing::warn!(path = %selected.path, error = %e, "on-select callback could not run");
            }
        }
    }
}

/// Result of callback execution
#[derive(Debug)]
pub struct CallbackResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Escape a string for shell use
fn shell_escape(s: &str) -> String {
    // Simple escaping: wrap in single quotes, escape existing single quotes
    if s.contains('\'') {
        format!("'{}'", s.replace('\'', "'\\''"))
    } else {
        format!("'{}'", s)
    }
}
