//! HTTP boundary for probes.
//!
//! The [`Transport`] trait issues a single GET and reports what happened
//! as a [`TransportOutcome`]: either the status code of a response or the
//! reason the request failed. Failures are values here, not errors; the
//! prober decides what they mean. [`HyperTransport`] is the production
//! implementation on top of the hyper legacy client with rustls.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::Full;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

pub type HttpsConnector =
    hyper_rustls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>;
pub type HttpClient = Client<HttpsConnector, Full<Bytes>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportOutcome {
    /// A response arrived; carries the numeric status code.
    Responded(u16),
    /// No response: connection refused, DNS failure, timeout, bad URI, ...
    Failed(String),
}

// async_trait is required here because the prober takes `&dyn Transport`
// and native async fn in traits does not support dyn dispatch.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> TransportOutcome;
}

#[must_use]
pub fn build_http_client() -> HttpClient {
    // rustls cannot pick a crypto provider on its own when more than one is
    // compiled in. Install `ring` explicitly; a second install is a no-op error.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let https = hyper_rustls::HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .build();
    Client::builder(TokioExecutor::new())
        .pool_idle_timeout(Duration::from_secs(30))
        .build(https)
}

/// Plain GET with no custom headers. Redirects are not followed, so a
/// 3xx is reported as-is. The response body is never read.
pub struct HyperTransport {
    client: HttpClient,
    timeout: Option<Duration>,
}

impl HyperTransport {
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            client: build_http_client(),
            timeout,
        }
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn get(&self, url: &str) -> TransportOutcome {
        let uri: hyper::Uri = match url.parse() {
            Ok(uri) => uri,
            Err(e) => return TransportOutcome::Failed(format!("invalid URI '{url}': {e}")),
        };

        let req = match hyper::Request::builder()
            .uri(uri)
            .body(Full::new(Bytes::new()))
        {
            Ok(req) => req,
            Err(e) => return TransportOutcome::Failed(e.to_string()),
        };

        let response = match self.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, self.client.request(req)).await {
                Ok(result) => result,
                Err(_) => {
                    return TransportOutcome::Failed(format!(
                        "request timed out after {}ms",
                        timeout.as_millis()
                    ))
                }
            },
            None => self.client.request(req).await,
        };

        match response {
            Ok(response) => TransportOutcome::Responded(response.status().as_u16()),
            Err(e) => TransportOutcome::Failed(error_chain(&e)),
        }
    }
}

/// Join an error and its sources, since hyper's top-level message alone
/// ("client error (Connect)") rarely says what went wrong.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
