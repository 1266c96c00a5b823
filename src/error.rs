//! Unified error types for filetree
//!
//! The tree core (filter, builder, icons) is total and never fails; these
//! errors cover the application shell around it.

/// Unified error type for filetree operations
#[derive(Debug, thiserror::Error)]
pub enum FiletreeError {
    /// I/O errors (reading the path list, terminal, log file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid exclusion pattern
    #[error("Pattern error: {pattern} - {reason}")]
    Pattern { pattern: String, reason: String },

    /// Problems with the supplied path list
    #[error("Input error: {0}")]
    Input(String),
}

/// Convenience Result type using FiletreeError
pub type Result<T> = std::result::Result<T, FiletreeError>;

impl FiletreeError {
    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a Pattern error
    pub fn pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create an Input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}
