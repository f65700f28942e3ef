//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Backend call:
//!     → timeouts.rs (probe: always bounded; forward: bounded only when configured)
//!     → TimedOut converted to a failure report or a 504 by the caller
//! ```
//!
//! # Design Decisions
//! - No retries: every upload and probe is attempted exactly once

pub mod timeouts;

pub use timeouts::{bounded, TimedOut};
