//! Structured logging setup using the `tracing` ecosystem.
//!
//! Configures a `tracing-subscriber` with either JSON output or
//! pretty-printed output. Format is auto-detected from the terminal but
//! can be forced via `--json` or `--pretty`. Logs go to stderr so the
//! report on stdout stays clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::LogLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[must_use]
pub fn resolve_format(pretty: bool, json: bool) -> LogFormat {
    if json {
        LogFormat::Json
    } else if pretty || std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

pub fn init(level: &LogLevel, format: LogFormat) {
    let tracing_level = level.to_tracing_level();
    let filter = tracing_subscriber::filter::Targets::new().with_default(tracing_level);

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_wins() {
        assert_eq!(resolve_format(false, true), LogFormat::Json);
    }

    #[test]
    fn pretty_flag_forces_pretty() {
        assert_eq!(resolve_format(true, false), LogFormat::Pretty);
    }
}
