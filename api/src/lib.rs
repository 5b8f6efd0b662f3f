//! HTTP layer: one query endpoint, the dataset view, and a health probe.

use std::{env, sync::Arc};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

pub mod core;
pub mod error_handler;
pub mod middleware_layer;
pub mod routes;

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        dataset::dataset_route::drone_data, health_route::health, query::query_route::answer_query,
    },
};

/// Binds the listener and serves until ctrl-c.
///
/// Address comes from `API_ADDRESS`, defaulting to `127.0.0.1:8080`.
pub async fn start() -> Result<(), AppError> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".into());

    let state = Arc::new(AppState::new());

    let app = Router::new()
        .route("/api/query", post(answer_query))
        .route("/drone_data", get(drone_data))
        .route("/health", get(health))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;

    info!(%host_url, "API listening");

    // Serve with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
