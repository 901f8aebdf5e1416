//! Locale subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     LocalesConfig
//!     → registry.rs (normalize, validate default)
//!     → splitter.rs (compile locale prefix pattern)
//!
//! Inbound request path:
//!     "/fr/about" → splitter → ("fr", "/about")
//!
//! Outbound link:
//!     requested locale → registry.resolve → supported locale or None
//! ```

pub mod registry;
pub mod splitter;

pub use registry::{is_locale_token, LocaleRegistry};
pub use splitter::LocaleSplitter;
