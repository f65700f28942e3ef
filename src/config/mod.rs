//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → BACKEND_URL / --backend-url overrides
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - An absent backend address is a valid state, never a startup failure

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_backend_override, apply_env_overrides, load_config, ConfigError};
pub use schema::{BackendConfig, GatewayConfig, ListenerConfig, ObservabilityConfig};
pub use validation::ValidationError;
