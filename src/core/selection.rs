//! File selection publishing
//!
//! A file click produces a [`SelectedFile`] which is handed to whatever
//! [`SelectionSink`] the owner of the tree injected.

use serde::{Deserialize, Serialize};

/// The value published when a file row is clicked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub path: String,
}

impl SelectedFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// JSON form: `{"path":"..."}`
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"path\":{:?}}}", self.path))
    }
}

/// Receives file selections
pub trait SelectionSink {
    fn on_file_selected(&mut self, selected: &SelectedFile);
}

impl<F> SelectionSink for F
where
    F: FnMut(&SelectedFile),
{
    fn on_file_selected(&mut self, selected: &SelectedFile) {
        self(selected)
    }
}

/// Sink that remembers every selection, last one wins for `current`
#[derive(Debug, Default)]
pub struct SelectionLog {
    history: Vec<SelectedFile>,
}

impl SelectionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent selection
    pub fn current(&self) -> Option<&SelectedFile> {
        self.history.last()
    }

    /// All selections, oldest first
    pub fn history(&self) -> &[SelectedFile] {
        &self.history
    }
}

impl SelectionSink for SelectionLog {
    fn on_file_selected(&mut self, selected: &SelectedFile) {
        self.history.push(selected.clone());
    }
}
