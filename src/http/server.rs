//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the gateway handlers
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener with graceful shutdown
//! - Record per-route request metrics

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::backend::build_client;
use crate::config::GatewayConfig;
use crate::health::HealthProbe;
use crate::http::request::{request_id, X_REQUEST_ID};
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::proxy::{ForwardError, UploadForwarder, UploadRequest};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub probe: Arc<HealthProbe>,
    pub forwarder: Arc<UploadForwarder>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> reqwest::Result<Self> {
        let client = build_client()?;

        let state = AppState {
            probe: Arc::new(HealthProbe::new(client.clone(), config.backend.clone())),
            forwarder: Arc::new(UploadForwarder::new(client, config.backend.clone())),
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/api/debug", get(debug_handler))
            .route("/api/highlight", post(highlight_handler))
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id(request.headers()),
                )
            }))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// Router with all layers applied, for serving or driving directly in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until the shutdown receiver fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend_configured = self.config.backend.is_externally_set(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Probe the backend and report the outcome.
async fn debug_handler(State(state): State<AppState>) -> Response {
    let start = Instant::now();

    let report = state.probe.probe().await;
    tracing::debug!(
        success = report.success,
        backend_url = %report.backend_url,
        duration = %report.duration,
        "Backend probe finished"
    );

    let response = report.into_response();
    metrics::record_request("debug", response.status().as_u16(), start);
    response
}

/// Relay an upload to the backend and return its PDF.
async fn highlight_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request_id(request.headers()).to_string();

    let result = match UploadRequest::from_request(request) {
        Ok(upload) => state.forwarder.forward(upload).await,
        Err(e) => Err(e),
    };

    let response = match result {
        Ok(artifact) => {
            tracing::info!(request_id = %request_id, size = artifact.bytes().len(), "Upload processed");
            artifact.into_response()
        }
        Err(e @ ForwardError::Backend { .. }) => {
            tracing::warn!(request_id = %request_id, error = %e, "Backend rejected upload");
            e.into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Critical error relaying upload");
            e.into_response()
        }
    };

    metrics::record_request("highlight", response.status().as_u16(), start);
    response
}
