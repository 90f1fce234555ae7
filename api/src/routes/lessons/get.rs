use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use services::{attendance_service::AttendanceService, token_service::TokenService};
use util::state::AppState;

use super::common::{AttendanceEntryResponse, TokenResponse};
use crate::response::{ApiResponse, service_error};
use crate::routes::extractors::PathParams;

/// GET /api/lessons/{lesson_id}/attendance
///
/// The lesson's register: one entry per current student of the class. Students added
/// after the lesson was created and not yet synchronized are reported absent.
///
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "student_id": "S1", "first_name": "Anna", "last_name": "Verdi", "is_present": true }
///   ],
///   "message": "Attendance retrieved"
/// }
/// ```
pub async fn get_attendance(
    State(state): State<AppState>,
    PathParams(lesson_id): PathParams<i64>,
) -> impl IntoResponse {
    match AttendanceService::roster(state.db(), lesson_id).await {
        Ok(rows) => {
            let data: Vec<AttendanceEntryResponse> =
                rows.into_iter().map(AttendanceEntryResponse::from).collect();
            (StatusCode::OK, Json(ApiResponse::success(data, "Attendance retrieved")))
        }
        Err(e) => service_error(e),
    }
}

/// GET /api/lessons/{lesson_id}/token
///
/// The live token, so the dashboard can redraw the code without rotating it.
/// `404` when the lesson does not exist or has no token.
pub async fn get_token(
    State(state): State<AppState>,
    PathParams(lesson_id): PathParams<i64>,
) -> impl IntoResponse {
    match TokenService::current_token(state.db(), lesson_id).await {
        Ok((live, class_id)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TokenResponse::current(live, class_id),
                "Token retrieved",
            )),
        ),
        Err(e) => service_error(e),
    }
}
