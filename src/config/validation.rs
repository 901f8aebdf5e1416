//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the locale set and that the default locale is supported
//! - Check every path pattern compiles
//! - Check URL prefixes and the bind address
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LocaleUrlConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{LocaleUrlConfig, ALL_ROUTING_KEYS};
use crate::error::LocaleUrlError;
use crate::exemption::{PathPattern, RoutingScope};
use crate::locale::{is_locale_token, LocaleRegistry};
use crate::routing::MountPrefix;

/// A single semantic problem in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Locale, pattern or mount prefix rejected by the component that owns it.
    #[error("{field}: {source}")]
    Invalid {
        field: String,
        #[source]
        source: LocaleUrlError,
    },

    /// A media or static URL prefix must be an absolute path.
    #[error("{field} must start with '/': '{value}'")]
    UrlPrefix { field: &'static str, value: String },

    /// The server bind address is not a socket address.
    #[error("server.bind_address is not a valid socket address: '{0}'")]
    BindAddress(String),

    /// A routing key in host_routing is empty.
    #[error("server.host_routing maps host '{0}' to an empty routing key")]
    EmptyRoutingKey(String),
}

impl ValidationError {
    fn invalid(field: impl Into<String>, source: LocaleUrlError) -> Self {
        Self::Invalid {
            field: field.into(),
            source,
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &LocaleUrlConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Report each malformed locale individually, then the set as a whole.
    let mut locales_ok = true;
    for code in &config.locales.supported {
        if !is_locale_token(&code.to_lowercase()) {
            locales_ok = false;
            errors.push(ValidationError::invalid(
                "locales.supported",
                LocaleUrlError::InvalidLocale(code.clone()),
            ));
        }
    }
    if locales_ok {
        if let Err(e) = LocaleRegistry::from_config(&config.locales) {
            errors.push(ValidationError::invalid("locales", e));
        }
    }

    let exemptions = &config.exemptions;
    for (field, value) in [
        ("exemptions.media_url", &exemptions.media_url),
        ("exemptions.static_url", &exemptions.static_url),
    ] {
        if !value.is_empty() && !value.starts_with('/') {
            errors.push(ValidationError::UrlPrefix {
                field,
                value: value.clone(),
            });
        }
    }

    for pattern in &exemptions.independent_paths {
        if let Err(e) = PathPattern::independent(pattern) {
            errors.push(ValidationError::invalid("exemptions.independent_paths", e));
        }
    }

    for (key, patterns) in &exemptions.restricted_paths {
        let scope = if key == ALL_ROUTING_KEYS {
            RoutingScope::All
        } else {
            RoutingScope::Key(key.clone())
        };
        for pattern in patterns {
            if let Err(e) = PathPattern::restricted(pattern, scope.clone()) {
                errors.push(ValidationError::invalid(
                    format!("exemptions.restricted_paths.{key}"),
                    e,
                ));
            }
        }
    }

    if exemptions.restrict_mode && exemptions.restricted_paths.values().all(Vec::is_empty) {
        tracing::warn!("Restricted mode enabled without restricted paths; no path will be localized");
    }

    if let Err(e) = MountPrefix::new(config.mount.prefix.as_str()) {
        errors.push(ValidationError::invalid("mount.prefix", e));
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.server.bind_address.clone(),
        ));
    }

    for (host, key) in &config.server.host_routing {
        if key.is_empty() {
            errors.push(ValidationError::EmptyRoutingKey(host.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
