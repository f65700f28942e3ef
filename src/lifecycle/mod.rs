//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → wait_for_shutdown_signal resolves
//!
//! Shutdown (shutdown.rs):
//!     trigger() → every subscriber (HTTP server) stops accepting → in-flight requests drain
//! ```
//!
//! # Design Decisions
//! - Tests drive shutdown through `Shutdown::trigger` without OS signals

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
