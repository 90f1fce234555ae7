use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use services::{attendance_service::AttendanceService, token_service::TokenService};
use util::{config, state::AppState};

use super::common::{SyncResponse, TokenResponse};
use crate::response::{ApiResponse, service_error};
use crate::routes::extractors::PathParams;

/// POST /api/lessons/{lesson_id}/attendance/sync
///
/// Adds an absent entry for every student of the class that has none for this lesson.
///
/// ```json
/// { "success": true, "data": { "added": 1 }, "message": "Attendance synchronized" }
/// ```
pub async fn sync_attendance(
    State(state): State<AppState>,
    PathParams(lesson_id): PathParams<i64>,
) -> impl IntoResponse {
    match AttendanceService::synchronize(state.db(), lesson_id).await {
        Ok(added) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SyncResponse { added },
                "Attendance synchronized",
            )),
        ),
        Err(e) => service_error(e),
    }
}

/// POST /api/lessons/{lesson_id}/token
///
/// Mints a new check-in token, replacing the previous one. The response carries what
/// the dashboard encodes into the scannable code.
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "token": "K3Q9ZP0A1B",
///     "lesson_id": 12,
///     "class_id": 3,
///     "created_at": "2025-10-01T09:00:12+00:00",
///     "address": "192.168.1.20",
///     "port": 3000,
///     "checkin_url": "http://192.168.1.20:3000/api/checkin"
///   },
///   "message": "Token issued"
/// }
/// ```
pub async fn issue_token(
    State(state): State<AppState>,
    PathParams(lesson_id): PathParams<i64>,
) -> impl IntoResponse {
    match TokenService::issue_token(state.db(), lesson_id).await {
        Ok(issued) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TokenResponse::issued(issued, config::port()),
                "Token issued",
            )),
        ),
        Err(e) => service_error(e),
    }
}
