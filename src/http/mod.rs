//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing layer)
//!     → request.rs (host, routing key)
//!     → middleware.rs (split locale, canonical redirect, URI rewrite)
//!     → application handler sees the bare path + RequestLocale
//! ```
//!
//! The server expects request paths relative to the mount point (the
//! deployment strips the mount prefix); redirects add it back.

pub mod middleware;
pub mod request;
pub mod server;

pub use middleware::{locale_middleware, LocaleState, RequestLocale};
pub use request::{request_host, RoutingKeyResolver};
pub use server::{EchoResponse, LocaleServer};
