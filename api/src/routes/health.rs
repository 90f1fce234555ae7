use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use tracing::error;
use util::{config, state::AppState};

use crate::response::ApiResponse;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

#[derive(Debug, Serialize, Default)]
pub struct HealthResponse {
    pub database: bool,
    pub port: u16,
    pub version: &'static str,
}

/// GET /health
///
/// Open to any peer, so a student's phone can confirm it reaches the server.
///
/// ```json
/// {
///   "success": true,
///   "data": { "database": true, "port": 3000, "version": "0.1.0" },
///   "message": "Attendance server is up"
/// }
/// ```
///
/// `503 Service Unavailable` (`StorageError`) when the store does not answer.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    if let Err(e) = state.db().ping().await {
        error!(error = %e, "Health check could not reach the database");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::<HealthResponse>::error(
                "StorageError",
                "Database unavailable",
            )),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            HealthResponse {
                database: true,
                port: config::port(),
                version: env!("CARGO_PKG_VERSION"),
            },
            "Attendance server is up",
        )),
    )
}
