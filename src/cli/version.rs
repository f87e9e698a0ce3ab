//! `--version` and `--help` output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: catalog [OPTIONS]

Terminal client for the product catalog API.

Options:
      --api-url <URL>  Base URL of the catalog API [env: CATALOG_API_URL]
  -V, --version        Print version
  -h, --help           Print help

Environment:
  CATALOG_API_URL           Base URL of the catalog API (default http://localhost:8080)
  CATALOG_TIMEOUT_SECS      Request timeout in seconds (default 30)
  RUST_LOG                  Log filter for the log file (default catalog=info)";

pub fn version_line() -> String {
    format!("catalog {}", VERSION)
}

/// Print the version string and exit successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Print usage and exit successfully.
pub fn handle_help_command() -> ! {
    println!("{}\n\n{}", version_line(), USAGE);
    std::process::exit(0)
}
