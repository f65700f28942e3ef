//! Request identification.
//!
//! # Responsibilities
//! - Name the request ID header shared by the inbound layers and the forwarder
//! - Read the ID back out of a request for logging
//!
//! # Design Decisions
//! - IDs are generated by tower-http's `SetRequestIdLayer` (UUID v4) as early as possible
//! - The same header is propagated to the backend and echoed to the caller

use axum::http::{header::HeaderName, HeaderMap};

/// Header carrying the per-request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID for logging, or `"unknown"` if none was assigned.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
