//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router for the API
//! - Wire up middleware (request ID, tracing, deadline, body limit)
//! - Serve on a bound listener until shutdown is signalled

use axum::{
    extract::{DefaultBodyLimit, Request},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::ServiceConfig;
use crate::http::request::{self, propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::shutdown;
use crate::resilience::RequestGateLayer;

/// HTTP server for the answer API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    pub fn new(config: ServiceConfig) -> Self {
        let router = build_router(&config);
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
///
/// Layers run outermost-last: the request ID is set before the trace span
/// opens, and the deadline covers body extraction and every fallback.
pub fn build_router(config: &ServiceConfig) -> Router {
    api::router()
        .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
        .layer(RequestGateLayer::new(config.timeouts.request_timeout()))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                path = %req.uri().path(),
                request_id = request::request_id(req).unwrap_or("unknown"),
            )
        }))
        .layer(set_request_id_layer())
}
