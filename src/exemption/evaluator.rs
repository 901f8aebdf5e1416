//! Locale independence decisions.
//!
//! # Responsibilities
//! - Path independence (media prefix, static prefix, independent patterns)
//! - Host independence
//! - Routing configuration independence
//! - Restricted-mode allow-list lookup
//!
//! # Design Decisions
//! - Hosts and routing configurations are independent unless listed as
//!   dependent; an absent host or routing key is independent
//! - Host comparison is case-insensitive, routing keys are exact
//! - Restricted patterns: wildcard bucket first, then the routing key's bucket

use std::collections::{HashMap, HashSet};

use crate::config::{ExemptionsConfig, ALL_ROUTING_KEYS};
use crate::error::LocaleUrlResult;
use crate::exemption::matcher::{AnyMatcher, Matcher, PathPattern, PrefixMatcher, RoutingScope};

/// Compiled, immutable exemption rules.
#[derive(Debug, Default)]
pub struct ExemptionConfig {
    independent_paths: AnyMatcher,
    dependent_hosts: HashSet<String>,
    dependent_routing: HashSet<String>,
    restrict_mode: bool,
    restricted_all: Vec<PathPattern>,
    restricted_by_routing: HashMap<String, Vec<PathPattern>>,
}

impl ExemptionConfig {
    /// Compile the `[exemptions]` configuration section.
    pub fn from_config(config: &ExemptionsConfig) -> LocaleUrlResult<Self> {
        let mut independent_paths = AnyMatcher::default();
        if config.independent_media_url && !config.media_url.is_empty() {
            independent_paths.push(PrefixMatcher::new(config.media_url.as_str()));
        }
        if config.independent_static_url && !config.static_url.is_empty() {
            independent_paths.push(PrefixMatcher::new(config.static_url.as_str()));
        }
        for pattern in &config.independent_paths {
            independent_paths.push(PathPattern::independent(pattern)?);
        }

        let mut restricted_all = Vec::new();
        let mut restricted_by_routing: HashMap<String, Vec<PathPattern>> = HashMap::new();
        for (key, patterns) in &config.restricted_paths {
            if key == ALL_ROUTING_KEYS {
                for pattern in patterns {
                    restricted_all.push(PathPattern::restricted(pattern, RoutingScope::All)?);
                }
            } else {
                let bucket = restricted_by_routing.entry(key.clone()).or_default();
                for pattern in patterns {
                    bucket.push(PathPattern::restricted(
                        pattern,
                        RoutingScope::Key(key.clone()),
                    )?);
                }
            }
        }

        Ok(Self {
            independent_paths,
            dependent_hosts: config
                .dependent_hosts
                .iter()
                .map(|h| h.to_lowercase())
                .collect(),
            dependent_routing: config.dependent_routing.iter().cloned().collect(),
            restrict_mode: config.restrict_mode,
            restricted_all,
            restricted_by_routing,
        })
    }

    /// Whether restricted mode is enabled.
    pub fn restrict_mode(&self) -> bool {
        self.restrict_mode
    }

    /// Returns true if the path never receives a locale prefix.
    pub fn is_path_independent(&self, path: &str) -> bool {
        self.independent_paths.matches(path)
    }

    /// Returns true unless `host` is listed as locale-dependent.
    ///
    /// Comparison is case-insensitive: the dependent host set is stored lowercased.
    pub fn is_host_independent(&self, host: Option<&str>) -> bool {
        match host {
            Some(host) => !self.dependent_hosts.contains(&host.to_lowercase()),
            None => true,
        }
    }

    /// Returns true unless `routing_key` is listed as locale-dependent.
    pub fn is_routing_independent(&self, routing_key: Option<&str>) -> bool {
        match routing_key {
            Some(key) => !self.dependent_routing.contains(key),
            None => true,
        }
    }

    /// Returns true if a restricted pattern for the wildcard bucket or the
    /// given routing configuration matches the path.
    pub fn is_restricted_path_allowed(&self, path: &str, routing_key: Option<&str>) -> bool {
        self.restricted_patterns(routing_key)
            .any(|pattern| pattern.matches(path))
    }

    /// Restricted patterns that apply to a routing configuration, wildcard first.
    pub fn restricted_patterns<'a>(
        &'a self,
        routing_key: Option<&str>,
    ) -> impl Iterator<Item = &'a PathPattern> + 'a {
        let scoped = routing_key
            .and_then(|key| self.restricted_by_routing.get(key))
            .map(Vec::as_slice)
            .unwrap_or_default();
        self.restricted_all.iter().chain(scoped.iter())
    }
}
