//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by route, status
//! - `gateway_request_duration_seconds` (histogram): handler latency by route
//! - `gateway_backend_probe_duration_seconds` (histogram): health probe latency by outcome
//!
//! # Design Decisions
//! - Prometheus exporter is opt-in (`observability.metrics_enabled`)
//! - Labels stay low-cardinality: route name and status code only

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a finished inbound request.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "gateway_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("gateway_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record a finished health probe.
pub fn record_probe(duration: Duration, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    metrics::histogram!("gateway_backend_probe_duration_seconds", "outcome" => outcome)
        .record(duration.as_secs_f64());
}
