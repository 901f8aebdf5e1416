//! Locale-prefixed URL handling.
//!
//! Decides whether a request path carries a locale prefix, strips it from
//! inbound paths and adds it to outbound links, honoring media/static and
//! pattern exemptions, locale-independent hosts and routing configurations,
//! restricted mode, and the deployment mount prefix.

pub mod config;
pub mod error;
pub mod exemption;
pub mod http;
pub mod lifecycle;
pub mod locale;
pub mod observability;
pub mod routing;

pub use config::LocaleUrlConfig;
pub use error::{LocaleUrlError, LocaleUrlResult};
pub use http::LocaleServer;
pub use lifecycle::Shutdown;
pub use routing::{LocaleRouter, MountPrefix};
