//! Allow-list HTTP server used as a test double.
//!
//! [`MockServer`] answers `200 {"message": "Endpoint <path> exists"}` for
//! allow-listed paths and `404 {"message": "Not Found"}` for everything
//! else. Extra per-path statuses can be configured with
//! [`MockServer::respond_with`] to exercise classification over the wire.
//!
//! [`MockServer::start`] runs the server on its own thread with its own
//! Tokio runtime and returns a [`MockServerHandle`]; stopping is done
//! through that handle, so callers can be sync or async and no global
//! server state exists.

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::JoinHandle;

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;

use crate::error::ScoutError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockMessage {
    pub message: String,
}

#[derive(Debug, Default)]
struct MockState {
    endpoints: HashSet<String>,
    overrides: HashMap<String, StatusCode>,
}

#[derive(Debug, Clone)]
pub struct MockServer {
    endpoints: Vec<String>,
    overrides: Vec<(String, u16)>,
    addr: SocketAddr,
}

impl MockServer {
    /// Server answering 200 for exactly `endpoints`, bound to an ephemeral
    /// localhost port.
    pub fn new<I, S>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            endpoints: endpoints.into_iter().map(Into::into).collect(),
            overrides: Vec::new(),
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        }
    }

    /// Answer `path` with `status` instead of the allow-list decision.
    #[must_use]
    pub fn respond_with(mut self, path: impl Into<String>, status: u16) -> Self {
        self.overrides.push((path.into(), status));
        self
    }

    #[must_use]
    pub fn bind(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    fn state(&self) -> Result<MockState, ScoutError> {
        let mut overrides = HashMap::new();
        for (path, code) in &self.overrides {
            let status = StatusCode::from_u16(*code)
                .map_err(|e| ScoutError::MockServer(format!("status {code} for {path}: {e}")))?;
            overrides.insert(path.clone(), status);
        }
        Ok(MockState {
            endpoints: self.endpoints.iter().cloned().collect(),
            overrides,
        })
    }

    /// Router serving the allow-list, for embedding in another server.
    pub fn router(&self) -> Result<Router, ScoutError> {
        Ok(Router::new()
            .fallback(mock_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::new(self.state()?)))
    }

    pub fn start(self) -> Result<MockServerHandle, ScoutError> {
        let router = self.router()?;

        let listener = std::net::TcpListener::bind(self.addr)?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let thread = std::thread::Builder::new()
            .name("mock-server".into())
            .spawn(move || {
                runtime.block_on(async move {
                    let listener = tokio::net::TcpListener::from_std(listener)?;
                    axum::serve(listener, router)
                        .with_graceful_shutdown(async {
                            let _ = shutdown_rx.await;
                        })
                        .await
                })
            })?;

        tracing::debug!(addr = %addr, endpoints = self.endpoints.len(), "mock server started");

        Ok(MockServerHandle {
            addr,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }
}

/// Running mock server. Dropping the handle also stops the server.
#[derive(Debug)]
pub struct MockServerHandle {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<std::io::Result<()>>>,
}

impl MockServerHandle {
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `http://<addr>` with no trailing slash, ready for path concatenation.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop accepting connections and wait for the server thread to exit.
    pub fn stop(mut self) -> Result<(), ScoutError> {
        self.shutdown_and_join()
    }

    fn shutdown_and_join(&mut self) -> Result<(), ScoutError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let Some(thread) = self.thread.take() else {
            return Ok(());
        };
        match thread.join() {
            Ok(result) => {
                tracing::debug!(addr = %self.addr, "mock server stopped");
                result.map_err(ScoutError::from)
            }
            Err(_) => Err(ScoutError::MockServer("server thread panicked".into())),
        }
    }
}

impl Drop for MockServerHandle {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown_and_join() {
            tracing::error!(error = %e, "mock server shutdown failed");
        }
    }
}

async fn mock_handler(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
) -> (StatusCode, Json<MockMessage>) {
    let path = uri.path_and_query().map_or("/", |pq| pq.as_str());

    if method != Method::GET {
        return (
            StatusCode::NOT_IMPLEMENTED,
            Json(MockMessage {
                message: format!("Unsupported method ({method})"),
            }),
        );
    }

    if let Some(status) = state.overrides.get(path) {
        return (
            *status,
            Json(MockMessage {
                message: format!("Endpoint {path} responded with {}", status.as_u16()),
            }),
        );
    }

    if state.endpoints.contains(path) {
        (
            StatusCode::OK,
            Json(MockMessage {
                message: format!("Endpoint {path} exists"),
            }),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(MockMessage {
                message: "Not Found".into(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_override_status_is_rejected() {
        let err = MockServer::new(["/api"]).respond_with("/bad", 42).start().unwrap_err();
        assert!(matches!(err, ScoutError::MockServer(_)));
    }

    #[test]
    fn start_and_stop() {
        let handle = MockServer::new(["/api"]).start().unwrap();
        let addr = handle.addr();
        assert_ne!(addr.port(), 0);
        assert_eq!(handle.base_url(), format!("http://{addr}"));
        handle.stop().unwrap();

        assert!(std::net::TcpStream::connect(addr).is_err());
    }

    #[test]
    fn binds_explicit_address() {
        // Reserve a free port, then hand it to the server.
        let reserved = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = reserved.local_addr().unwrap();
        drop(reserved);

        let handle = MockServer::new(["/api"]).bind(addr).start().unwrap();
        assert_eq!(handle.addr(), addr);
        assert!(std::net::TcpStream::connect(addr).is_ok());
        handle.stop().unwrap();
    }

    #[test]
    fn dropping_handle_stops_server() {
        let handle = MockServer::new(Vec::<String>::new()).start().unwrap();
        let addr = handle.addr();
        drop(handle);

        assert!(std::net::TcpStream::connect(addr).is_err());
    }
}
