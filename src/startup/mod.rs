//! Startup pieces run before the TUI takes over the terminal.

pub mod config;
pub mod logging;

pub use config::{CatalogConfig, DEFAULT_TIMEOUT, ENV_API_URL, ENV_TIMEOUT_SECS};
pub use logging::{default_log_dir, init_logging};
