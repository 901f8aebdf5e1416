//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (config load, router compile, redirects,
//!       per-path composition decisions at trace level)
//!     → logging.rs (subscriber: env filter + pretty/JSON formatter)
//! ```

pub mod logging;
