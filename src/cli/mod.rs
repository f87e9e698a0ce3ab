//! Command-line handling, run before the TUI starts.
//!
//! ```ignore
//! use catalog::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(api_url) = run_cli_command(command) {
//!     // start the TUI
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Run a CLI-only command, or hand back what the TUI needs.
///
/// `Version` and `Help` print and exit. `Run` returns its `--api-url`
/// override, which may itself be `None`.
pub fn run_cli_command(command: CliCommand) -> Option<Option<String>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run { api_url } => Some(api_url),
    }
}
