//! HTTP read surface
//!
//! A minimal axum server exposing the record collection as JSON:
//!
//! - `GET /api/hospitals` - the full collection, one mapping per record,
//!   keys in file column order
//! - `GET /health` - liveness check
//! - `GET /` - service name and version
//!
//! The server only ever reads the store; updates go through the CLI. Store
//! failures map to a 500 with an error object rather than the historical
//! 200-with-error-body shape.

use crate::adapters::store::RecordStore;
use crate::domain::errors::TriageError;
use crate::domain::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};

/// Shared state for the axum application
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Creates server state around a record store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

/// Error envelope for the HTTP surface
///
/// Internal failures surface as a non-2xx status with `{"error": message}`.
struct ApiError(TriageError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            TriageError::DataSource(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TriageError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %self.0, status = %status, "Request failed");
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<TriageError> for ApiError {
    fn from(err: TriageError) -> Self {
        Self(err)
    }
}

/// Builds the application router
pub fn build_router(state: AppState, cors_enabled: bool) -> Router {
    let mut router = Router::new()
        .route("/", get(service_info_handler))
        .route("/health", get(health_handler))
        .route("/api/hospitals", get(list_hospitals_handler))
        .with_state(state);

    if cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

/// Handler for `GET /`
async fn service_info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for `GET /health`
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Handler for `GET /api/hospitals`
async fn list_hospitals_handler(
    State(state): State<AppState>,
) -> std::result::Result<Json<serde_json::Value>, ApiError> {
    let collection = state.store.load().await.map_err(ApiError)?;
    tracing::debug!(records = collection.len(), "Serving hospital records");
    Ok(Json(json!({ "hospitals": collection.to_mappings() })))
}

/// Runs the HTTP server until the shutdown signal fires
///
/// # Errors
///
/// Returns `TriageError::Server` when the listener cannot bind or the
/// server fails while running.
pub async fn serve(
    addr: SocketAddr,
    state: AppState,
    cors_enabled: bool,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let router = build_router(state, cors_enabled);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| TriageError::Server(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, cors_enabled, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = shutdown.wait_for(|stop| *stop).await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| TriageError::Server(e.to_string()))?;

    Ok(())
}
