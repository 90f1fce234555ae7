use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use services::attendance_service::AttendanceService;
use util::state::AppState;
use validator::Validate;

use super::common::SetAttendanceRequest;
use crate::response::{ApiResponse, Empty, service_error};
use crate::routes::extractors::{JsonBody, PathParams};
use crate::routes::common::{format_validation_errors, validation_failure};

/// PUT /api/lessons/{lesson_id}/attendance/{student_id}
///
/// Manual override from the dashboard.
///
/// ### Request Body
/// ```json
/// { "is_present": true }
/// ```
///
/// `404` when the lesson does not exist or the student has no entry for it.
pub async fn set_attendance(
    State(state): State<AppState>,
    PathParams((lesson_id, student_id)): PathParams<(i64, String)>,
    JsonBody(req): JsonBody<SetAttendanceRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failure(format_validation_errors(&errors));
    }
    let Some(present) = req.is_present else {
        return validation_failure("is_present is required");
    };

    match AttendanceService::toggle(state.db(), lesson_id, &student_id, present).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Attendance updated")),
        ),
        Err(e) => service_error(e),
    }
}
