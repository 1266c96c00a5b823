//! File logging
//!
//! The terminal belongs to the UI, so log output only ever goes to a file,
//! and only when `--log FILE` is given.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "FILETREE_LOG";

/// Filter from `FILETREE_LOG`, falling back to `info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global subscriber that appends to `path`
pub fn init_file_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("Cannot open log file {}: {}", path.display(), e))?;

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Cannot install logger: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        assert!(init_file_logging(dir.path()).is_err());
    }
}
