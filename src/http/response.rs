//! Response mapping for diagnostic results.
//!
//! # Design Decisions
//! - A probe that reached the backend answers 200, even when the backend itself is unhealthy
//! - A probe that never got an answer (connect error, DNS, timeout) answers 500
//! - Both carry the full HealthReport as JSON

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::health::HealthReport;

impl IntoResponse for HealthReport {
    fn into_response(self) -> Response {
        let status = if self.is_transport_failure() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        };
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unhealthy_backend_still_answers_ok() {
        let report = HealthReport::answered("http://b".into(), 503, Duration::from_millis(1), None, false);
        assert_eq!(report.into_response().status(), StatusCode::OK);
    }

    #[test]
    fn test_unreachable_backend_answers_internal_error() {
        let report = HealthReport::unreachable("http://b".into(), Duration::from_millis(1), "refused".into(), false);
        assert_eq!(report.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
