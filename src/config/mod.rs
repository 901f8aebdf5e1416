//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LocaleUrlConfig (validated, immutable)
//!     → compiled into LocaleRouter, shared via Arc
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    ExemptionsConfig, LocaleUrlConfig, LocalesConfig, MountConfig, ObservabilityConfig,
    ServerConfig, ALL_ROUTING_KEYS,
};
pub use validation::{validate_config, ValidationError};
