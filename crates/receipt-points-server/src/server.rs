//! API server setup.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use receipt_points::Processor;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Build the router with the middleware selected by `config`.
///
/// Bodies over `max_body_bytes` are cut off by the extractor and answered
/// like any other invalid receipt.
pub fn build_app(config: &ServerConfig, processor: Arc<Processor>) -> Router {
    let mut router = create_router(AppState::from_shared(processor))
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    if config.log_requests {
        tracing::info!("request logging enabled");
        router = router.layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(true),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );
    }

    router
}

/// Bind the configured host and port. The host may be a name or an IP.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| ServerError::Bind {
            addr: format!("{}:{}", config.host, config.port),
            source,
        })
}

/// Run the API server until it fails.
pub async fn run_server(config: ServerConfig, processor: Processor) -> Result<(), ServerError> {
    let listener = bind(&config).await?;
    let router = build_app(&config, Arc::new(processor));

    tracing::info!("receipt points server listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;

    Ok(())
}
