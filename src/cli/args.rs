//! Command-line argument parsing.

use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI, optionally against a different API
    Run { api_url: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
}

/// Parse command-line arguments (program name first) into a command.
///
/// `--version` and `--help` win over everything else. Unknown arguments are
/// ignored.
///
/// ```
/// use catalog::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["catalog".to_string(), "--api-url=http://api:9000".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     Ok(CliCommand::Run { api_url: Some("http://api:9000".to_string()) })
/// );
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut api_url = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--api-url" => match args.next() {
                Some(value) if !value.starts_with('-') => api_url = Some(value),
                _ => return Err(ArgsError::MissingValue("--api-url")),
            },
            other => {
                if let Some(value) = other.strip_prefix("--api-url=") {
                    if value.is_empty() {
                        return Err(ArgsError::MissingValue("--api-url"));
                    }
                    api_url = Some(value.to_string());
                }
            }
        }
    }

    Ok(CliCommand::Run { api_url })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let mut all = vec!["catalog".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run { api_url: None }));
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_api_url_forms() {
        let expected = Ok(CliCommand::Run {
            api_url: Some("http://10.0.0.5:8080".to_string()),
        });
        assert_eq!(parse(&["--api-url", "http://10.0.0.5:8080"]), expected);
        assert_eq!(parse(&["--api-url=http://10.0.0.5:8080"]), expected);
    }

    #[test]
    fn test_parse_api_url_missing_value() {
        assert_eq!(
            parse(&["--api-url"]),
            Err(ArgsError::MissingValue("--api-url"))
        );
        assert_eq!(
            parse(&["--api-url", "--version"]),
            Err(ArgsError::MissingValue("--api-url"))
        );
        assert_eq!(
            parse(&["--api-url="]),
            Err(ArgsError::MissingValue("--api-url"))
        );
    }

    #[test]
    fn test_version_wins_over_api_url() {
        assert_eq!(
            parse(&["--api-url", "http://x", "--version"]),
            Ok(CliCommand::Version)
        );
    }

    #[test]
    fn test_parse_unknown_flag_is_ignored() {
        assert_eq!(parse(&["--unknown"]), Ok(CliCommand::Run { api_url: None }));
    }
}
