//! Backend health probing.
//!
//! # Responsibilities
//! - Resolve the backend target for this request
//! - GET the health endpoint under a fixed upper bound
//! - Turn every outcome (answer, connect error, timeout) into a HealthReport

use bytes::Bytes;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Instant;

use crate::backend::{describe_error, BackendTarget};
use crate::config::BackendConfig;
use crate::health::report::HealthReport;
use crate::observability::metrics;
use crate::resilience::timeouts;

/// Probes the backend's health endpoint on demand.
#[derive(Debug, Clone)]
pub struct HealthProbe {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HealthProbe {
    pub fn new(client: reqwest::Client, config: BackendConfig) -> Self {
        Self { client, config }
    }

    /// Run one probe. Never fails; failures are reported in the returned value.
    pub async fn probe(&self) -> HealthReport {
        let target = BackendTarget::resolve(self.config.url.as_deref());
        let env_var_set = self.config.is_externally_set();
        let url = target.endpoint(&self.config.health_path);
        let limit = self.config.probe_timeout();

        tracing::info!(backend_url = %target, timeout_ms = limit.as_millis() as u64, "Checking backend connection");

        let start = Instant::now();
        let outcome = timeouts::bounded(Some(limit), self.fetch(&url)).await;
        let elapsed = start.elapsed();

        let report = match outcome {
            Ok(Ok((status, body))) => {
                if !status.is_success() {
                    tracing::warn!(backend_url = %target, status = %status, "Health check returned non-success status");
                }
                HealthReport::answered(target.to_string(), status.as_u16(), elapsed, body, env_var_set)
            }
            Ok(Err(e)) => {
                let error = describe_error(&e);
                tracing::warn!(backend_url = %target, error = %error, "Health check failed: connection error");
                HealthReport::unreachable(target.to_string(), elapsed, error, env_var_set)
            }
            Err(timed_out) => {
                tracing::warn!(backend_url = %target, "Health check failed: timeout");
                HealthReport::unreachable(target.to_string(), elapsed, timed_out.to_string(), env_var_set)
            }
        };

        metrics::record_probe(elapsed, report.success);
        report
    }

    async fn fetch(&self, url: &str) -> reqwest::Result<(StatusCode, Option<Bytes>)> {
        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read health body");
                None
            }
        };

        Ok((status, body))
    }
}
