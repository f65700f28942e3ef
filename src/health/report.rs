//! Diagnostic report returned by the health probe.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Substituted when the backend body is neither JSON nor UTF-8 text, or could not be read.
pub const NO_BODY: &str = "No body";

/// Outcome of one probe against the backend's health endpoint.
///
/// Produced on every path; a failed probe is a report with `success: false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// True only when the backend answered with a 2xx status.
    pub success: bool,

    /// Backend status code, absent when no response was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Resolved target that was probed.
    pub backend_url: String,

    /// Wall-clock duration of the attempt, e.g. `"42ms"`.
    pub duration: String,

    /// Backend body: parsed JSON, plain text, or the placeholder. `null` on transport failure.
    pub response: Value,

    /// Whether the backend address came from configuration rather than the default.
    pub env_var_set: bool,

    /// Transport failure description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    /// Report for a probe that received a response.
    pub fn answered(
        backend_url: String,
        status: u16,
        elapsed: Duration,
        body: Option<Bytes>,
        env_var_set: bool,
    ) -> Self {
        Self {
            success: (200..300).contains(&status),
            status: Some(status),
            backend_url,
            duration: format_duration(elapsed),
            response: interpret_body(body.as_deref()),
            env_var_set,
            error: None,
        }
    }

    /// Report for a probe that never got a response.
    pub fn unreachable(backend_url: String, elapsed: Duration, error: String, env_var_set: bool) -> Self {
        Self {
            success: false,
            status: None,
            backend_url,
            duration: format_duration(elapsed),
            response: Value::Null,
            env_var_set,
            error: Some(error),
        }
    }

    /// True when the backend never answered (connect failure, DNS, timeout).
    pub fn is_transport_failure(&self) -> bool {
        self.status.is_none()
    }
}

pub fn format_duration(elapsed: Duration) -> String {
    format!("{}ms", elapsed.as_millis())
}

/// Interpret a health body: JSON first, then UTF-8 text, then the placeholder.
pub fn interpret_body(body: Option<&[u8]>) -> Value {
    body.and_then(parse_json)
        .or_else(|| body.and_then(parse_text))
        .unwrap_or_else(|| Value::String(NO_BODY.to_string()))
}

fn parse_json(bytes: &[u8]) -> Option<Value> {
    serde_json::from_slice(bytes).ok()
}

fn parse_text(bytes: &[u8]) -> Option<Value> {
    std::str::from_utf8(bytes)
        .ok()
        .map(|text| Value::String(text.to_string()))
}
