//! Locale router: the public entry point for path and URL rewriting.
//!
//! # Responsibilities
//! - Own the compiled registry, splitter, exemptions and mount prefix
//! - Split locales from inbound paths
//! - Compose outbound paths and full URLs
//! - Re-target or strip the locale of an existing URL
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks, share via Arc)
//! - Every call takes its request-scoped inputs explicitly
//! - Only the mount prefix precondition is surfaced as an error

use std::borrow::Cow;

use crate::config::LocaleUrlConfig;
use crate::error::LocaleUrlResult;
use crate::exemption::ExemptionConfig;
use crate::locale::{LocaleRegistry, LocaleSplitter};
use crate::routing::composer::{Composer, LocalizedPath};
use crate::routing::mount::MountPrefix;

/// Compiled locale URL rules.
#[derive(Debug)]
pub struct LocaleRouter {
    registry: LocaleRegistry,
    splitter: LocaleSplitter,
    exemptions: ExemptionConfig,
    mount_prefix: MountPrefix,
    prefix_default_locale: bool,
}

impl LocaleRouter {
    /// Create a router from already-compiled parts.
    pub fn new(
        registry: LocaleRegistry,
        exemptions: ExemptionConfig,
        mount_prefix: MountPrefix,
        prefix_default_locale: bool,
    ) -> LocaleUrlResult<Self> {
        let splitter = LocaleSplitter::new(registry.supported())?;
        Ok(Self {
            registry,
            splitter,
            exemptions,
            mount_prefix,
            prefix_default_locale,
        })
    }

    /// Compile a router from configuration.
    pub fn from_config(config: &LocaleUrlConfig) -> LocaleUrlResult<Self> {
        let router = Self::new(
            LocaleRegistry::from_config(&config.locales)?,
            ExemptionConfig::from_config(&config.exemptions)?,
            MountPrefix::new(config.mount.prefix.as_str())?,
            config.locales.prefix_default_locale,
        )?;

        tracing::debug!(
            locales = ?router.registry.supported(),
            default_locale = router.registry.default_locale(),
            mount_prefix = %router.mount_prefix,
            restrict_mode = router.exemptions.restrict_mode(),
            "Locale router compiled"
        );

        Ok(router)
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn exemptions(&self) -> &ExemptionConfig {
        &self.exemptions
    }

    /// The configured mount prefix.
    pub fn mount_prefix(&self) -> &MountPrefix {
        &self.mount_prefix
    }

    pub fn prefix_default_locale(&self) -> bool {
        self.prefix_default_locale
    }

    /// Resolve a candidate locale to a supported one.
    pub fn resolve_supported_locale(&self, candidate: &str) -> Option<&str> {
        self.registry.resolve(candidate)
    }

    /// Returns true if the locale is the default locale.
    pub fn is_default_locale(&self, locale: &str) -> bool {
        self.registry.is_default_locale(locale)
    }

    /// Separate the locale prefix from a path. See [`LocaleSplitter::split`].
    pub fn split_locale<'p>(&self, path: &'p str) -> (&'p str, &'p str) {
        self.splitter.split(path)
    }

    fn composer(&self) -> Composer<'_> {
        Composer {
            registry: &self.registry,
            exemptions: &self.exemptions,
            prefix_default_locale: self.prefix_default_locale,
        }
    }

    /// Compose a path and report the decision that produced it.
    pub fn localize<'p>(
        &'p self,
        path: &'p str,
        locale: &str,
        host: Option<&str>,
        routing_key: Option<&str>,
    ) -> LocalizedPath<'p> {
        self.composer().localize(path, locale, host, routing_key)
    }

    /// Generate the locale-prefixed path from a path without locale prefix.
    ///
    /// An empty or unsupported locale uses the default locale.
    pub fn compose_path<'p>(
        &'p self,
        path: &'p str,
        locale: &str,
        host: Option<&str>,
        routing_key: Option<&str>,
    ) -> Cow<'p, str> {
        self.localize(path, locale, host, routing_key).path
    }

    /// Prepend a mount prefix (the configured one when `None`) to a path.
    pub fn add_mount_prefix(&self, path: &str, prefix: Option<&MountPrefix>) -> String {
        prefix.unwrap_or(&self.mount_prefix).add(path)
    }

    /// Split a URL at the mount prefix (the configured one when `None`).
    pub fn strip_mount_prefix<'u>(
        &self,
        url: &'u str,
        prefix: Option<&MountPrefix>,
    ) -> LocaleUrlResult<(&'u str, &'u str)> {
        prefix.unwrap_or(&self.mount_prefix).strip(url)
    }

    /// Generate the full URL (mount prefix included) for a path without
    /// locale prefix.
    pub fn build_localized_url(
        &self,
        path: &str,
        locale: &str,
        host: Option<&str>,
        mount_prefix: Option<&MountPrefix>,
        routing_key: Option<&str>,
    ) -> String {
        let path = self.compose_path(path, locale, host, routing_key);
        self.add_mount_prefix(&path, mount_prefix)
    }

    /// Re-target a URL (mount prefix included) to another locale.
    pub fn change_locale(
        &self,
        url: &str,
        locale: &str,
        host: Option<&str>,
        routing_key: Option<&str>,
    ) -> LocaleUrlResult<String> {
        let (_, path) = self.strip_mount_prefix(url, None)?;
        let (_, path) = self.split_locale(path);
        Ok(self.build_localized_url(path, locale, host, None, routing_key))
    }

    /// Remove the locale segment from a URL, keeping the mount prefix.
    pub fn remove_locale(&self, url: &str) -> LocaleUrlResult<String> {
        let (mount, path) = self.strip_mount_prefix(url, None)?;
        let (_, path) = self.split_locale(path);
        Ok(format!("{mount}{path}"))
    }
}
