//! Pick mode (--pick option)
//!
//! Lets external tools use filetree as a file picker. The selected path is
//! written to stdout once the terminal has been restored.

use std::io::{self, Write};
use std::str::FromStr;

use crate::core::SelectedFile;

/// Exit codes for the application
///
/// These codes are stable and can be relied upon for scripting:
/// - `SUCCESS` (0): Normal exit or file selected in pick mode
/// - `CANCELLED` (1): User quit pick mode without selecting
/// - `ERROR` (2): Runtime error (I/O error, terminal error, etc.)
/// - `INVALID` (3): Invalid command-line arguments or option values
pub mod exit_code {
    /// User selected a file or normal exit
    pub const SUCCESS: i32 = 0;
    /// User cancelled selection (pick mode only)
    pub const CANCELLED: i32 = 1;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag, invalid format)
    pub const INVALID: i32 = 3;
}

/// Output format for the picked path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bare path on one line (default)
    #[default]
    Lines,
    /// `{"path": "..."}`
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" | "line" => Ok(Self::Lines),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Write a selection in the requested format
pub fn write_selection<W: Write>(
    out: &mut W,
    selected: &SelectedFile,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Lines => writeln!(out, "{}", selected.path)?,
        OutputFormat::Json => writeln!(out, "{}", selected.to_json())?,
    }
    out.flush()
}

/// Output the selection to stdout
pub fn output_selection(selected: &SelectedFile, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_selection(&mut handle, selected, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("lines".parse::<OutputFormat>(), Ok(OutputFormat::Lines));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_write_lines() {
        let mut out = Vec::new();
        write_selection(&mut out, &SelectedFile::new("src/app.ts"), OutputFormat::Lines).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "src/app.ts\n");
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_selection(&mut out, &SelectedFile::new("src/app.ts"), OutputFormat::Json).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"path\":\"src/app.ts\"}\n"
        );
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            exit_code::SUCCESS,
            exit_code::CANCELLED,
            exit_code::ERROR,
            exit_code::INVALID,
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }
}
