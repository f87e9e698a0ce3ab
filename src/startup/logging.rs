//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log lines go to `catalog.log` under the
//! platform's local data directory instead.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "catalog.log";
pub const DEFAULT_LOG_FILTER: &str = "catalog=info";

/// `<data-local>/catalog`, e.g. `~/.local/share/catalog` on Linux.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("catalog"))
}

/// Create `dir` if needed and open the log file in append mode.
pub fn open_log_file(dir: &Path) -> io::Result<(File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// `RUST_LOG` when set and valid, `catalog=info` otherwise.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log path, or `None` when no file could be opened or a
/// subscriber was already installed. Logging is then simply off.
pub fn init_logging(dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = dir.or_else(default_log_dir)?;
    let (file, path) = open_log_file(&dir).ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(path)
}
