//! Outbound path composition.
//!
//! # Responsibilities
//! - Decide whether a locale prefix belongs on a path
//! - Return the path with or without the prefix, and why
//!
//! # Design Decisions
//! - Checks run in a fixed order; the first exemption short-circuits:
//!   restricted mode → host + routing → path → default locale → prefix
//! - Unsupported requested locales fall back to the default locale
//! - Unchanged paths are borrowed, not copied

use std::borrow::Cow;

use crate::exemption::ExemptionConfig;
use crate::locale::LocaleRegistry;

/// Why a path was or was not prefixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Restricted mode is on and the path is not in the allow-list.
    NotRestricted,
    /// Both the host and the routing configuration are locale-independent.
    IndependentHostAndRouting,
    /// The path is a media/static path or matches an independent pattern.
    IndependentPath,
    /// The locale is the default and default-locale prefixing is off.
    DefaultLocale,
    /// The locale prefix was added.
    Prefixed,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::NotRestricted => "not_restricted",
            Decision::IndependentHostAndRouting => "independent_host_and_routing",
            Decision::IndependentPath => "independent_path",
            Decision::DefaultLocale => "default_locale",
            Decision::Prefixed => "prefixed",
        }
    }
}

/// A composed path plus the locale that was prepended, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedPath<'a> {
    pub path: Cow<'a, str>,
    pub locale: Option<&'a str>,
    pub decision: Decision,
}

impl<'a> LocalizedPath<'a> {
    fn unchanged(path: &'a str, decision: Decision) -> Self {
        Self {
            path: Cow::Borrowed(path),
            locale: None,
            decision,
        }
    }
}

/// Inputs that stay fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a> {
    pub registry: &'a LocaleRegistry,
    pub exemptions: &'a ExemptionConfig,
    pub prefix_default_locale: bool,
}

impl<'a> Composer<'a> {
    /// Generate the locale-prefixed form of a path without locale prefix.
    ///
    /// An empty or unsupported `requested_locale` uses the default locale.
    pub fn localize<'p>(
        &self,
        path: &'p str,
        requested_locale: &str,
        host: Option<&str>,
        routing_key: Option<&str>,
    ) -> LocalizedPath<'p>
    where
        'a: 'p,
    {
        let exemptions = self.exemptions;

        if exemptions.restrict_mode() && !exemptions.is_restricted_path_allowed(path, routing_key) {
            return LocalizedPath::unchanged(path, Decision::NotRestricted);
        }

        let locale = self
            .registry
            .resolve(requested_locale)
            .unwrap_or_else(|| self.registry.default_locale());

        let decision = if exemptions.is_host_independent(host)
            && exemptions.is_routing_independent(routing_key)
        {
            Decision::IndependentHostAndRouting
        } else if exemptions.is_path_independent(path) {
            Decision::IndependentPath
        } else if self.registry.is_default_locale(locale) && !self.prefix_default_locale {
            Decision::DefaultLocale
        } else {
            Decision::Prefixed
        };

        tracing::trace!(
            path,
            locale,
            host = host.unwrap_or_default(),
            routing_key = routing_key.unwrap_or_default(),
            decision = decision.as_str(),
            "Composed locale path"
        );

        if decision != Decision::Prefixed {
            return LocalizedPath::unchanged(path, decision);
        }

        let mut prefixed = String::with_capacity(locale.len() + path.len() + 1);
        prefixed.push('/');
        prefixed.push_str(locale);
        prefixed.push_str(path);

        LocalizedPath {
            path: Cow::Owned(prefixed),
            locale: Some(locale),
            decision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExemptionsConfig;
    use std::collections::BTreeMap;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::new(["en", "fr", "fr-ca"], "en").unwrap()
    }

    fn dependent_exemptions() -> ExemptionConfig {
        ExemptionConfig::from_config(&ExemptionsConfig {
            static_url: "/static/".into(),
            independent_paths: vec!["^/api/".into()],
            dependent_hosts: vec!["example.com".into()],
            dependent_routing: vec!["main".into()],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_prefixes_non_default_locale() {
        let registry = registry();
        let exemptions = dependent_exemptions();
        let composer = Composer {
            registry: &registry,
            exemptions: &exemptions,
            prefix_default_locale: false,
        };

        let result = composer.localize("/about", "fr", Some("example.com"), Some("main"));
        assert_eq!(result.path, "/fr/about");
        assert_eq!(result.locale, Some("fr"));
        assert_eq!(result.decision, Decision::Prefixed);
    }

    #[test]
    fn test_default_locale_is_not_prefixed() {
        let registry = registry();
        let exemptions = dependent_exemptions();
        let composer = Composer {
            registry: &registry,
            exemptions: &exemptions,
            prefix_default_locale: false,
        };

        let result = composer.localize("/about", "en", Some("example.com"), Some("main"));
        assert_eq!(result.path, "/about");
        assert_eq!(result.locale, None);
        assert_eq!(result.decision, Decision::DefaultLocale);
    }

    #[test]
    fn test_prefix_default_locale_option() {
        let registry = registry();
        let exemptions = dependent_exemptions();
        let composer = Composer {
            registry: &registry,
            exemptions: &exemptions,
            prefix_default_locale: true,
        };

        let result = composer.localize("/about", "en", Some("example.com"), Some("main"));
        assert_eq!(result.path, "/en/about");
    }

    #[test]
    fn test_unsupported_locale_falls_back_to_default() {
        let registry = registry();
        let exemptions = dependent_exemptions();
        let composer = Composer {
            registry: &registry,
            exemptions: &exemptions,
            prefix_default_locale: true,
        };

        assert_eq!(
            composer.localize("/about", "de", Some("example.com"), None).path,
            "/en/about"
        );
        assert_eq!(
            composer.localize("/about", "", Some("example.com"), None).path,
            "/en/about"
        );
        assert_eq!(
            composer.localize("/about", "FR-BE", Some("example.com"), None).path,
            "/fr/about"
        );
    }

    #[test]
    fn test_both_axes_independent_short_circuits() {
        let registry = registry();
        let exemptions = dependent_exemptions();
        let composer = Composer {
            registry: &registry,
            exemptions: &exemptions,
            prefix_default_locale: true,
        };

        let result = composer.localize("/about", "fr", Some("other.org"), Some("admin"));
        assert_eq!(result.path, "/about");
        assert_eq!(result.decision, Decision::IndependentHostAndRouting);

        let result = composer.localize("/about", "fr", None, None);
        assert_eq!(result.decision, Decision::IndependentHostAndRouting);
    }

    #[test]
    fn test_one_dependent_axis_is_enough() {
        let registry = registry();
        let exemptions = dependent_exemptions();
        let composer = Composer {
            registry: &registry,
            exemptions: &exemptions,
            prefix_default_locale: false,
        };

        assert_eq!(composer.localize("/about", "fr", Some("other.org"), Some("main")).path, "/fr/about");
        assert_eq!(composer.localize("/about", "fr", Some("example.com"), None).path, "/fr/about");
    }

    #[test]
    fn test_independent_paths_are_unchanged() {
        let registry = registry();
        let exemptions = dependent_exemptions();
        let composer = Composer {
            registry: &registry,
            exemptions: &exemptions,
            prefix_default_locale: true,
        };

        for path in ["/static/site.css", "/api/users"] {
            let result = composer.localize(path, "fr", Some("example.com"), Some("main"));
            assert_eq!(result.path, path);
            assert_eq!(result.decision, Decision::IndependentPath);
        }
    }

    #[test]
    fn test_restricted_mode_is_an_allow_list() {
        let registry = registry();
        let mut restricted = BTreeMap::new();
        restricted.insert("main".to_string(), vec!["^/shop/".to_string()]);
        let exemptions = ExemptionConfig::from_config(&ExemptionsConfig {
            dependent_hosts: vec!["example.com".into()],
            restrict_mode: true,
            restricted_paths: restricted,
            ..Default::default()
        })
        .unwrap();
        let composer = Composer {
            registry: &registry,
            exemptions: &exemptions,
            prefix_default_locale: false,
        };

        let result = composer.localize("/about", "fr", Some("example.com"), Some("main"));
        assert_eq!(result.path, "/about");
        assert_eq!(result.decision, Decision::NotRestricted);

        let result = composer.localize("/shop/cart", "fr", Some("example.com"), Some("main"));
        assert_eq!(result.path, "/fr/shop/cart");

        let result = composer.localize("/shop/cart", "fr", Some("example.com"), Some("blog"));
        assert_eq!(result.decision, Decision::NotRestricted);
    }
}
