//! Error definitions for locale URL handling.

use thiserror::Error;

/// Errors raised while building the locale router or rewriting URLs.
///
/// Unsupported locales are not errors: resolution returns `None` and callers
/// fall back to the default locale.
#[derive(Debug, Error)]
pub enum LocaleUrlError {
    /// No supported locales were configured.
    #[error("No supported locales configured")]
    EmptyLocaleSet,

    /// A configured locale code does not have the shape of a locale.
    #[error("Invalid locale code: '{0}'")]
    InvalidLocale(String),

    /// The default locale code does not resolve to a supported locale.
    #[error("Default locale '{0}' is not a supported locale")]
    UnsupportedDefaultLocale(String),

    /// A path pattern failed to compile.
    #[error("Invalid path pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A mount prefix does not start and end with a slash.
    #[error("Mount prefix must start and end with '/': '{0}'")]
    InvalidMountPrefix(String),

    /// A URL was expected to start with the mount prefix but does not.
    #[error("URL must start with mount prefix '{prefix}': {url}")]
    Precondition { url: String, prefix: String },
}

/// Result type for locale URL operations.
pub type LocaleUrlResult<T> = Result<T, LocaleUrlError>;
