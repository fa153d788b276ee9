//! Endpoint probing and classification.
//!
//! [`probe`] runs two phases in order: every generated snippet combination,
//! then every `full.known` endpoint. Each URL is `base_url + path` by plain
//! concatenation, and each request finishes before the next one starts.
//! Only endpoints classified as [`Status::Existing`] are returned.
//!
//! Classification treats any status other than 404, 408 or 410 as proof
//! the route exists, including 5xx: a server rejecting the probe's shape
//! still has the route. Transport failures collapse to
//! [`Status::NotFound`], so a network blip looks the same as a real 404.

use std::fmt;

use serde::Serialize;

use crate::config::model::Config;
use crate::generator::generate_combinations;
use crate::transport::{Transport, TransportOutcome};

/// Status codes that mean "no endpoint here".
pub const NOT_FOUND_CODES: [u16; 3] = [404, 408, 410];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "code", rename_all = "snake_case")]
pub enum Status {
    NotFound,
    Existing(u16),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("Not Found"),
            Self::Existing(code) => write!(f, "Existing (Status: {code})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub endpoint: String,
    pub status: Status,
}

impl ProbeResult {
    #[must_use]
    pub fn existing(endpoint: impl Into<String>, code: u16) -> Self {
        Self {
            endpoint: endpoint.into(),
            status: Status::Existing(code),
        }
    }
}

#[must_use]
pub fn classify(outcome: &TransportOutcome) -> Status {
    match outcome {
        TransportOutcome::Responded(code) if NOT_FOUND_CODES.contains(code) => Status::NotFound,
        TransportOutcome::Responded(code) => Status::Existing(*code),
        TransportOutcome::Failed(_) => Status::NotFound,
    }
}

/// Issue one GET and classify it. Never fails: transport errors are logged
/// and reported as [`Status::NotFound`].
pub async fn check_endpoint(transport: &dyn Transport, url: &str) -> Status {
    tracing::info!(url = %url, "checking endpoint");

    let outcome = transport.get(url).await;
    match &outcome {
        TransportOutcome::Responded(code) => {
            tracing::info!(url = %url, status = code, "endpoint responded");
        }
        TransportOutcome::Failed(reason) => {
            tracing::warn!(url = %url, error = %reason, "request failed");
        }
    }

    classify(&outcome)
}

pub async fn probe(transport: &dyn Transport, base_url: &str, config: &Config) -> Vec<ProbeResult> {
    let mut found = Vec::new();

    let candidates = generate_combinations(config);
    let known = config.full.known.iter().cloned();

    for endpoint in candidates.chain(known) {
        let url = format!("{base_url}{endpoint}");
        match check_endpoint(transport, &url).await {
            Status::NotFound => {}
            status => found.push(ProbeResult { endpoint, status }),
        }
    }

    tracing::info!(
        probed = config.total_probes(),
        found = found.len(),
        "probing complete"
    );

    found
}
