//! Command-line interface definitions using clap derive macros.
//!
//! The tool takes exactly one positional argument, the base URL. Options
//! have environment variable equivalents. Argument errors map to exit
//! code 1 through [`usage_exit_code`].

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "endpoint-scout",
    version,
    about = "Discover live HTTP endpoints from version/resource snippets and known paths",
    after_help = "\x1b[1mExamples:\x1b[0m\n  \
        endpoint-scout example.com                     Probe http://example.com\n  \
        endpoint-scout https://api.example.com -f json Machine-readable report\n  \
        endpoint-scout localhost:8000 -c paths.toml    Use a specific config file"
)]
pub struct Cli {
    /// Base URL to probe; `http://` is assumed when no scheme is given
    pub base_url: String,

    /// Endpoint config file (.toml, .yaml, .json); defaults to
    /// endpoints_config.toml beside the executable
    #[arg(short, long, env = "ENDPOINT_SCOUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,

    /// Per-request timeout in milliseconds (transport default when unset)
    #[arg(long, env = "REQUEST_TIMEOUT_MS")]
    pub timeout: Option<u64>,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

/// Exit code for a failed parse: 0 for `--help`/`--version`, 1 otherwise.
#[must_use]
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_positional_parses() {
        let cli = Cli::try_parse_from(["endpoint-scout", "example.com"]).unwrap();
        assert_eq!(cli.base_url, "example.com");
        assert_eq!(cli.format, ReportFormat::Text);
        assert!(cli.timeout.is_none());
    }

    #[test]
    fn missing_base_url_exits_with_one() {
        let err = Cli::try_parse_from(["endpoint-scout"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(usage_exit_code(&err), 1);
    }

    #[test]
    fn extra_positional_exits_with_one() {
        let err = Cli::try_parse_from(["endpoint-scout", "a.com", "b.com"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), 1);
    }

    #[test]
    fn help_exits_with_zero() {
        let err = Cli::try_parse_from(["endpoint-scout", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), 0);
    }

    #[test]
    fn options_do_not_count_as_positionals() {
        let cli = Cli::try_parse_from([
            "endpoint-scout",
            "--format",
            "json",
            "--timeout",
            "250",
            "-c",
            "paths.toml",
            "localhost:8000",
        ])
        .unwrap();
        assert_eq!(cli.base_url, "localhost:8000");
        assert_eq!(cli.format, ReportFormat::Json);
        assert_eq!(cli.timeout, Some(250));
        assert_eq!(cli.config, Some(PathBuf::from("paths.toml")));
    }

    #[test]
    fn pretty_and_json_conflict() {
        assert!(Cli::try_parse_from(["endpoint-scout", "--pretty", "--json", "x"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
