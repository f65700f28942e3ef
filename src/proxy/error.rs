//! Forwarding errors and the client-facing JSON envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Message returned for every failure that happens before the backend answers.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error processing PDF";

/// Errors produced while relaying an upload to the backend.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Incoming request was not a multipart form upload.
    #[error("expected a multipart/form-data upload, got '{0}'")]
    NotMultipart(String),

    /// Multipart upload without a boundary, or whose body does not open with it.
    #[error("malformed multipart upload: {0}")]
    MalformedUpload(String),

    /// Client's upload stream failed before it could be checked.
    #[error("failed to read upload: {0}")]
    UploadRead(String),

    /// Connection, DNS or upload-stream failure before a response arrived.
    #[error("backend request failed: {0}")]
    Transport(String),

    /// Backend answered with a non-success status.
    #[error("backend returned {status}")]
    Backend { status: StatusCode, details: String },

    /// Backend answered 2xx but its body could not be read completely.
    #[error("failed to read backend response: {0}")]
    BodyRead(String),

    /// Configured forward deadline elapsed.
    #[error("backend did not respond within {}s", .0.as_secs())]
    Timeout(Duration),
}

/// JSON body returned to the caller on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ForwardError {
    /// Status code sent to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            ForwardError::Backend { status, .. } => *status,
            ForwardError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            ForwardError::Backend { status, details } => ErrorEnvelope {
                error: format!("Backend processing failed: {}", status.as_u16()),
                details: Some(details.clone()),
            },
            ForwardError::Timeout(_) => ErrorEnvelope {
                error: "Backend processing timed out".to_string(),
                details: Some(self.to_string()),
            },
            _ => ErrorEnvelope {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
                details: Some(self.to_string()),
            },
        }
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.envelope())).into_response()
    }
}
