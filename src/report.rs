//! Rendering of probe results.
//!
//! [`render`] produces the human-readable tree; [`render_json`] the
//! machine-readable form. Neither filters nor reorders.

use std::fmt::Write;

use crate::error::ScoutError;
use crate::probe::ProbeResult;

pub const HEADER: &str = "Found Endpoints:";

#[must_use]
pub fn render(results: &[ProbeResult]) -> String {
    let mut buf = String::from(HEADER);
    buf.push('\n');
    for result in results {
        // write! to String is infallible (only fails on OOM which is unrecoverable)
        let _ = writeln!(buf, "\u{2514}\u{2500}\u{2500} {}: {}", result.endpoint, result.status);
    }
    buf
}

pub fn render_json(results: &[ProbeResult]) -> Result<String, ScoutError> {
    Ok(serde_json::to_string_pretty(results)?)
}
