//! Request inspection.
//!
//! # Responsibilities
//! - Extract the request host (Host header, else URI authority)
//! - Resolve the routing key for a host
//!
//! # Design Decisions
//! - Hosts are lowercased and stripped of their port before lookup
//! - Unknown hosts fall back to the default routing key (which may be absent)

use std::collections::HashMap;

use axum::http::{header, Request};

use crate::config::ServerConfig;

/// Normalized host of a request, without port.
pub fn request_host<B>(req: &Request<B>) -> Option<String> {
    let raw = req
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| req.uri().host())?;

    let host = strip_port(raw.trim()).to_lowercase();
    (!host.is_empty()).then_some(host)
}

fn strip_port(host: &str) -> &str {
    // Bracketed IPv6 literal: "[::1]:8080"
    if let Some(end) = host.find(']') {
        return &host[..=end];
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

/// Maps request hosts to routing configuration keys.
#[derive(Debug, Clone, Default)]
pub struct RoutingKeyResolver {
    default_key: Option<String>,
    by_host: HashMap<String, String>,
}

impl RoutingKeyResolver {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            default_key: config.default_routing_key.clone(),
            by_host: config
                .host_routing
                .iter()
                .map(|(host, key)| (host.to_lowercase(), key.clone()))
                .collect(),
        }
    }

    /// Routing key for a host.
    pub fn resolve(&self, host: Option<&str>) -> Option<&str> {
        host.and_then(|h| self.by_host.get(h))
            .or(self.default_key.as_ref())
            .map(String::as_str)
    }
}
