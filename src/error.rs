//! Unified error type for endpoint-scout.
//!
//! Defines [`ScoutError`], the crate error enum. It derives `Display` and
//! `Error` via `thiserror`. Only fatal conditions live here: per-probe
//! transport failures never become a `ScoutError`, they are collapsed to
//! [`Status::NotFound`](crate::probe::Status::NotFound) by the prober.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ScoutError {
    #[error("Config file not found: {}", path.display())]
    ConfigFileNotFound { path: PathBuf },

    #[error("Config parse error in {path}:\n  {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Unsupported config format: '{0}'")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Mock server error: {0}")]
    MockServer(String),
}
