//! endpoint-scout discovers live HTTP endpoints on a host.
//!
//! Version and resource snippets from a config file are combined into
//! candidate paths, probed alongside a list of known endpoints, and every
//! path that does not answer 404, 408 or 410 is reported. Probing is
//! strictly sequential and best-effort: a failed request counts as not
//! found and never stops the run.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- The scan command wiring the stages below together.
//! - [`config`] -- Config model and file loading.
//! - [`generator`] -- Lazy `versions × resources` candidate generation.
//! - [`transport`] -- HTTP GET boundary returning `Responded | Failed`.
//! - [`probe`] -- Classification and the two-phase probing loop.
//! - [`report`] -- Tree and JSON rendering of results.
//! - [`normalize`] -- Base URL scheme fix-up.
//! - [`mock`] -- Allow-list HTTP server for integration testing.
//! - [`error`] -- Unified error type using `thiserror`.
//! - [`logging`] -- Structured tracing setup with JSON and pretty output.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `toml` | TOML config file support _(enabled by default)_ |
//! | `yaml` | YAML config file support |
//! | `json` | JSON config file support |
//! | `mock-server` | Allow-list mock HTTP server _(enabled by default)_ |
//! | `file-backends` | All file format backends |
//! | `full` | All features |

// Binary crate: public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
#[cfg(feature = "mock-server")]
pub mod mock;
pub mod normalize;
pub mod probe;
pub mod report;
pub mod transport;
