//! Health probing subsystem.
//!
//! # Data Flow
//! ```text
//! GET /api/debug
//!     → probe.rs (resolve target, bounded GET <target>/health)
//!     → report.rs (status class, duration, JSON → text → placeholder body)
//!     → HealthReport serialized back to the caller
//! ```
//!
//! # Design Decisions
//! - Probing is on demand; there is no background monitor
//! - A failed probe is data, not an error
//! - The bound covers connect, headers and body read together

pub mod probe;
pub mod report;

pub use probe::HealthProbe;
pub use report::HealthReport;
