use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use db::models::lesson;
use services::{ServiceError, token_service::TokenService};
use tracing::info;
use util::state::AppState;

use crate::response::{ApiResponse, Empty, service_error};
use crate::routes::extractors::PathParams;

/// DELETE /api/lessons/{lesson_id}
///
/// Removes the lesson with its attendance, token and device registrations.
pub async fn delete_lesson(
    State(state): State<AppState>,
    PathParams(lesson_id): PathParams<i64>,
) -> impl IntoResponse {
    match lesson::Model::delete_by_id(state.db(), lesson_id).await {
        Ok(true) => {
            info!(lesson_id, "Lesson deleted");
            (StatusCode::OK, Json(ApiResponse::success(Empty, "Lesson deleted")))
        }
        Ok(false) => service_error(ServiceError::lesson_not_found(lesson_id)),
        Err(e) => service_error(ServiceError::from(e)),
    }
}

/// DELETE /api/lessons/{lesson_id}/token
///
/// Revokes the live token; check-ins fail with `InvalidToken` until a new one is issued.
pub async fn revoke_token(
    State(state): State<AppState>,
    PathParams(lesson_id): PathParams<i64>,
) -> impl IntoResponse {
    match TokenService::revoke_token(state.db(), lesson_id).await {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success(Empty, "Token revoked"))),
        Err(e) => service_error(e),
    }
}
