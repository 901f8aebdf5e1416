//! Locale routing subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request:
//!     "/app/fr/about"
//!     → mount.rs (strip mount prefix, done by the deployment)
//!     → router.split_locale → ("fr", "/about")
//!     → application routes on "/about"
//!
//! Outbound link:
//!     "/about" + locale + host + routing key
//!     → composer.rs (exemptions, default locale) → "/fr/about"
//!     → mount.rs (add mount prefix) → "/app/fr/about"
//! ```
//!
//! # Design Decisions
//! - Router compiled at startup, immutable at runtime
//! - Deterministic: same inputs always produce the same path
//! - Split and compose round-trip for locale-dependent paths

pub mod composer;
pub mod mount;
pub mod router;

pub use composer::{Decision, LocalizedPath};
pub use mount::MountPrefix;
pub use router::LocaleRouter;
