//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap backend calls with an optional deadline
//! - Cancel the wrapped future cleanly when the deadline passes
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other errors and carry the limit that was exceeded
//! - `None` means wait indefinitely

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// A bounded call did not finish in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("timed out after {}ms", .0.as_millis())]
pub struct TimedOut(pub Duration);

impl TimedOut {
    pub fn limit(&self) -> Duration {
        self.0
    }
}

/// Run `fut`, abandoning it if `limit` elapses first.
///
/// Dropping the future on timeout releases whatever it held (sockets, buffers).
pub async fn bounded<F>(limit: Option<Duration>, fut: F) -> Result<F::Output, TimedOut>
where
    F: Future,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| TimedOut(limit)),
        None => Ok(fut.await),
    }
}
