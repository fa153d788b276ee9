//! Configuration loading and config file resolution.
//!
//! [`load_config`] reads a file and parses it according to its extension
//! via [`parse_config_str`]. [`resolve_config_path`] decides which file a
//! run uses: an explicit path wins, then `endpoints_config.toml` beside the
//! executable, then the same name in the current directory.

pub mod model;

use std::path::{Path, PathBuf};

use crate::error::ScoutError;
use model::Config;

/// File name looked up beside the executable and in the working directory.
pub const CONFIG_FILE_NAME: &str = "endpoints_config.toml";

/// Parse a config string based on file extension.
pub fn parse_config_str(
    ext: &str,
    content: &str,
    path_display: &str,
) -> Result<Config, ScoutError> {
    match ext {
        #[cfg(feature = "toml")]
        "toml" => toml::from_str(content).map_err(|e| ScoutError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "yaml")]
        "yaml" | "yml" => serde_yml::from_str(content).map_err(|e| ScoutError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "json")]
        "json" => serde_json::from_str(content).map_err(|e| ScoutError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        other => Err(ScoutError::UnsupportedFormat(other.to_string())),
    }
}

/// Read and parse the config file at `path`. Nothing is cached.
pub fn load_config(path: &Path) -> Result<Config, ScoutError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ScoutError::ConfigFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ScoutError::Io(e)
        }
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let config = parse_config_str(ext, &content, &path.display().to_string())?;

    tracing::debug!(
        path = %path.display(),
        versions = config.snippets.versions.len(),
        resources = config.snippets.resources.len(),
        known = config.full.known.len(),
        "config loaded"
    );

    Ok(config)
}

/// `endpoints_config.toml` in the directory holding the running executable.
pub fn default_config_path() -> Result<PathBuf, ScoutError> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(CONFIG_FILE_NAME))
}

pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ScoutError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let beside_exe = default_config_path()?;
    if beside_exe.is_file() {
        return Ok(beside_exe);
    }

    let in_cwd = PathBuf::from(CONFIG_FILE_NAME);
    if in_cwd.is_file() {
        tracing::info!(path = %in_cwd.display(), "auto-detected config file");
        return Ok(in_cwd);
    }

    // Neither exists: report the canonical location in the not-found error.
    Ok(beside_exe)
}
