//! # Logging
//!
//! The TUI owns the terminal, so log records go to a file instead of
//! stderr:
//!
//! ```text
//! ~/.local/share/foundry/foundry.log
//! ```
//!
//! The filter is read from `RUST_LOG` and defaults to `info`.

use crate::config::APP_NAME;
use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Default log file location.
pub fn log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine application data directory")?;
    Ok(dirs.data_dir().join(format!("{APP_NAME}.log")))
}

/// Route `log` records into `path`, appending to an existing file.
pub fn init_file_logger(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Logger already initialized")?;

    Ok(())
}

/// Set up file logging, warning on stderr if it can't be done.
pub fn init() {
    let result = log_path().and_then(|path| init_file_logger(&path));
    if let Err(e) = result {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_path_ends_with_app_log() {
        if let Ok(path) = log_path() {
            assert!(path.ends_with("foundry.log"));
        }
    }

    #[test]
    fn test_init_file_logger_creates_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("logs").join("foundry.log");

        // Another test may already own the global logger.
        let _ = init_file_logger(&path);
        assert!(path.exists());
    }
}
