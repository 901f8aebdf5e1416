//! Locale middleware.
//!
//! Splits the locale off the request path, redirects to the canonical
//! locale path when needed, and otherwise hands the bare path to the
//! application with a [`RequestLocale`] extension attached.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, uri::PathAndQuery, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::request::{request_host, RoutingKeyResolver};
use crate::routing::LocaleRouter;

/// State required by the locale middleware.
#[derive(Debug, Clone)]
pub struct LocaleState {
    pub router: Arc<LocaleRouter>,
    pub resolver: Arc<RoutingKeyResolver>,
    pub redirect_to_canonical: bool,
}

/// Locale context attached to requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLocale {
    /// Active locale (from the path, else the default locale).
    pub locale: String,
    /// Whether the locale came from the request path.
    pub from_path: bool,
    /// Request path with the locale segment removed.
    pub path: String,
    pub host: Option<String>,
    pub routing_key: Option<String>,
}

pub async fn locale_middleware(
    State(state): State<LocaleState>,
    mut req: Request,
    next: Next,
) -> Response {
    let router = &state.router;
    let full_path = req.uri().path().to_string();
    let host = request_host(&req);
    let routing_key = state.resolver.resolve(host.as_deref()).map(str::to_string);

    let (path_locale, bare_path) = router.split_locale(&full_path);
    let locale = router
        .resolve_supported_locale(path_locale)
        .unwrap_or_else(|| router.registry().default_locale())
        .to_string();

    if state.redirect_to_canonical {
        let canonical =
            router.compose_path(bare_path, &locale, host.as_deref(), routing_key.as_deref());
        if canonical != full_path.as_str() {
            let mut location = router.add_mount_prefix(&canonical, None);
            if let Some(query) = req.uri().query() {
                location.push('?');
                location.push_str(query);
            }
            tracing::debug!(from = %full_path, to = %location, "Redirecting to canonical locale path");
            return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response();
        }
    }

    if bare_path != full_path {
        match rewrite_path(req.uri(), bare_path) {
            Ok(uri) => *req.uri_mut() = uri,
            Err(e) => {
                tracing::warn!(path = %full_path, error = %e, "Failed to rewrite request path");
                return (StatusCode::BAD_REQUEST, "Invalid request path").into_response();
            }
        }
    }

    req.extensions_mut().insert(RequestLocale {
        locale,
        from_path: !path_locale.is_empty(),
        path: bare_path.to_string(),
        host,
        routing_key,
    });

    next.run(req).await
}

/// Replace the path of a URI, keeping scheme, authority and query.
fn rewrite_path(uri: &Uri, path: &str) -> Result<Uri, axum::http::Error> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>()?);
    Ok(Uri::from_parts(parts)?)
}
