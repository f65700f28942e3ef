//! Upload forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/highlight
//!     → UploadRequest (content type + length + body stream, untouched)
//!     → forward.rs (resolve target, POST <target>/highlight-pdf)
//!     → 2xx: PdfArtifact (fully buffered, application/pdf)
//!     → otherwise: ForwardError → error.rs JSON envelope
//! ```
//!
//! # Design Decisions
//! - The upload is never parsed or validated; the backend owns that
//! - The artifact is buffered before responding so a failing backend never yields a truncated PDF
//! - Backend status codes are passed through on backend-reported failures

pub mod error;
pub mod forward;

pub use error::{ErrorEnvelope, ForwardError};
pub use forward::{PdfArtifact, UploadForwarder, UploadRequest};
