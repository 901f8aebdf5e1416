//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for locale URL
//! handling. All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Bucket name for restricted paths that apply to every routing configuration.
pub const ALL_ROUTING_KEYS: &str = "ALL";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LocaleUrlConfig {
    /// Supported locales and default-locale handling.
    pub locales: LocalesConfig,

    /// Rules exempting paths, hosts and routing configurations from prefixing.
    pub exemptions: ExemptionsConfig,

    /// Deployment mount point.
    pub mount: MountConfig,

    /// HTTP server settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Supported locale set.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalesConfig {
    /// Supported locale codes (e.g., "en", "fr-ca"), in preference order.
    pub supported: Vec<String>,

    /// Default locale code. May be a regional code reducible to a supported one.
    pub default: String,

    /// Prefix paths with the default locale as well.
    pub prefix_default_locale: bool,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            supported: vec!["en".to_string()],
            default: "en".to_string(),
            prefix_default_locale: false,
        }
    }
}

/// Exemption rules.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExemptionsConfig {
    /// URL prefix for uploaded media (e.g., "/media/"). Empty disables the check.
    pub media_url: String,

    /// Treat paths under `media_url` as locale-independent.
    pub independent_media_url: bool,

    /// URL prefix for static assets (e.g., "/static/"). Empty disables the check.
    pub static_url: String,

    /// Treat paths under `static_url` as locale-independent.
    pub independent_static_url: bool,

    /// Regular expressions for locale-independent paths (search semantics).
    pub independent_paths: Vec<String>,

    /// Hosts that receive locale prefixes. All other hosts are independent.
    pub dependent_hosts: Vec<String>,

    /// Routing configurations that receive locale prefixes.
    pub dependent_routing: Vec<String>,

    /// Only paths listed in `restricted_paths` get locale handling.
    pub restrict_mode: bool,

    /// Routing key (or "ALL") → regular expressions allowed in restricted mode.
    pub restricted_paths: BTreeMap<String, Vec<String>>,
}

impl Default for ExemptionsConfig {
    fn default() -> Self {
        Self {
            media_url: String::new(),
            independent_media_url: true,
            static_url: String::new(),
            independent_static_url: true,
            independent_paths: Vec::new(),
            dependent_hosts: Vec::new(),
            dependent_routing: Vec::new(),
            restrict_mode: false,
            restricted_paths: BTreeMap::new(),
        }
    }
}

/// Mount point configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MountConfig {
    /// Path prefix the application is served under. Must start and end with "/".
    pub prefix: String,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            prefix: "/".to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Routing key used when the host has no entry in `host_routing`.
    pub default_routing_key: Option<String>,

    /// Host → routing key.
    pub host_routing: BTreeMap<String, String>,

    /// Redirect requests whose path is not in canonical locale form.
    pub redirect_to_canonical: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            default_routing_key: None,
            host_routing: BTreeMap::new(),
            redirect_to_canonical: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: LocaleUrlConfig = toml::from_str("").unwrap();
        assert_eq!(config.locales.supported, vec!["en"]);
        assert_eq!(config.locales.default, "en");
        assert_eq!(config.mount.prefix, "/");
        assert!(config.exemptions.independent_media_url);
        assert!(!config.exemptions.restrict_mode);
        assert!(config.server.redirect_to_canonical);
    }

    #[test]
    fn test_full_config_parses() {
        let config: LocaleUrlConfig = toml::from_str(
            r#"
            [locales]
            supported = ["en", "fr", "fr-ca"]
            default = "en-us"
            prefix_default_locale = true

            [exemptions]
            media_url = "/media/"
            static_url = "/static/"
            independent_static_url = false
            independent_paths = ["^/api/", "\\.xml$"]
            dependent_hosts = ["example.com"]
            dependent_routing = ["main"]
            restrict_mode = true

            [exemptions.restricted_paths]
            ALL = ["^/shop/"]
            main = ["^/about"]

            [mount]
            prefix = "/app/"

            [server]
            default_routing_key = "main"

            [server.host_routing]
            "blog.example.com" = "blog"
            "#,
        )
        .unwrap();

        assert_eq!(config.locales.supported.len(), 3);
        assert!(config.locales.prefix_default_locale);
        assert!(!config.exemptions.independent_static_url);
        assert_eq!(config.exemptions.independent_paths.len(), 2);
        assert_eq!(config.exemptions.restricted_paths[ALL_ROUTING_KEYS], vec!["^/shop/"]);
        assert_eq!(config.mount.prefix, "/app/");
        assert_eq!(config.server.default_routing_key.as_deref(), Some("main"));
        assert_eq!(config.server.host_routing["blog.example.com"], "blog");
    }
}
