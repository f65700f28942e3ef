//! Backend addressing subsystem.
//!
//! # Data Flow
//! ```text
//! BackendConfig.url (file / BACKEND_URL / --backend-url)
//!     → target.rs (normalize scheme, default to localhost)
//!     → BackendTarget
//!     → health probe and upload forwarder build endpoint URLs from it
//!     → client.rs (outbound reqwest client, one connection per call)
//! ```
//!
//! # Design Decisions
//! - Resolved per request; no target is cached between requests
//! - Whether the address was externally supplied is reported, not inferred from the result

pub mod client;
pub mod target;

pub use client::{build_client, describe_error};
pub use target::{BackendTarget, DEFAULT_BACKEND_URL};
