//! Base URL fix-up applied to the command-line argument.

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Trim surrounding whitespace and default the scheme to `http://`.
///
/// Only the scheme is touched: paths, ports and trailing slashes are kept
/// as given, since probe URLs are built by plain concatenation.
#[must_use]
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if SCHEMES.iter().any(|scheme| trimmed.starts_with(scheme)) {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}
