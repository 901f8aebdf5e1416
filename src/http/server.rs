//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Compile the locale router from configuration
//! - Create the Axum Router with the locale middleware
//! - Serve an echo handler that reports the request's locale context
//! - Bind server to listener with graceful shutdown

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    middleware,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::trace::TraceLayer;

use crate::config::LocaleUrlConfig;
use crate::error::LocaleUrlResult;
use crate::http::middleware::{locale_middleware, LocaleState, RequestLocale};
use crate::http::request::RoutingKeyResolver;
use crate::routing::LocaleRouter;

/// Body returned by the echo handler.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub locale: String,
    pub from_path: bool,
    pub path: String,
    pub host: Option<String>,
    pub routing_key: Option<String>,
    /// Supported locale → URL of this page in that locale.
    pub alternates: BTreeMap<String, String>,
}

/// HTTP server exposing the locale middleware.
pub struct LocaleServer {
    router: Router,
}

impl LocaleServer {
    /// Create a new server serving the echo application.
    pub fn new(config: &LocaleUrlConfig) -> LocaleUrlResult<Self> {
        let echo = Router::new()
            .route("/", get(echo_handler))
            .route("/{*path}", get(echo_handler));
        Self::with_app(config, echo)
    }

    /// Create a new server serving `app` behind the locale middleware.
    ///
    /// `app` routes on the bare path: `/fr/about` reaches a `/about` route.
    pub fn with_app(config: &LocaleUrlConfig, app: Router<LocaleState>) -> LocaleUrlResult<Self> {
        let state = LocaleState {
            router: Arc::new(LocaleRouter::from_config(config)?),
            resolver: Arc::new(RoutingKeyResolver::from_config(&config.server)),
            redirect_to_canonical: config.server.redirect_to_canonical,
        };
        let router = Self::build_router(state, app);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The locale middleware wraps the finished application router instead of
    /// being added with `Router::layer`, so its URI rewrite happens before the
    /// application matches routes.
    pub fn build_router(state: LocaleState, app: Router<LocaleState>) -> Router {
        let app: Router = app.with_state(state.clone());
        let localized = middleware::from_fn_with_state(state, locale_middleware).layer(app);

        Router::new()
            .fallback_service(localized)
            .layer(TraceLayer::new_for_http())
    }

    /// The Axum router, for embedding or testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn echo_handler(
    State(state): State<LocaleState>,
    Extension(ctx): Extension<RequestLocale>,
) -> Json<EchoResponse> {
    let router = &state.router;
    let alternates = router
        .registry()
        .supported()
        .iter()
        .map(|locale| {
            let url = router.build_localized_url(
                &ctx.path,
                locale,
                ctx.host.as_deref(),
                None,
                ctx.routing_key.as_deref(),
            );
            (locale.clone(), url)
        })
        .collect();

    Json(EchoResponse {
        locale: ctx.locale,
        from_path: ctx.from_path,
        path: ctx.path,
        host: ctx.host,
        routing_key: ctx.routing_key,
        alternates,
    })
}
