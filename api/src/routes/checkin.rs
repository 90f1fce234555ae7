//! Student self check-in.
//!
//! `POST /api/checkin` is the only non-health route reachable from the LAN. The
//! student's device submits the token shown on the dashboard together with the lesson
//! id and its own student id; the peer address identifies the device.

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use services::registration_service::{CheckIn, RegistrationService};
use std::net::SocketAddr;
use util::state::AppState;
use validator::Validate;

use crate::response::{ApiResponse, Empty, service_error};
use crate::routes::common::{flexible_id, format_validation_errors, trimmed, validation_failure};
use crate::routes::extractors::JsonBody;

/// Body of a check-in. Field names are camelCase; snake_case is accepted too.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,

    #[serde(default, alias = "lesson_id", deserialize_with = "flexible_id")]
    #[validate(required(message = "lessonId is required"))]
    pub lesson_id: Option<i64>,

    #[serde(default, alias = "student_id", deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "studentId is required"))]
    pub student_id: String,
}

/// POST /api/checkin
///
/// ### Request Body
/// ```json
/// { "token": "K3Q9ZP0A1B", "lessonId": 12, "studentId": "S1029" }
/// ```
///
/// ### Responses
/// - `200 OK` attendance recorded
/// - `400 Bad Request` missing field (`ValidationError`)
/// - `404 Not Found` wrong or rotated token (`InvalidToken`), or the student is not in
///   the lesson's class (`StudentNotEnrolled`)
/// - `403 Forbidden` this device already checked in for the lesson (`DuplicateOrigin`)
/// - `500 Internal Server Error` (`StorageError`)
pub async fn checkin(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    JsonBody(req): JsonBody<CheckinRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failure(format_validation_errors(&errors));
    }
    let Some(lesson_id) = req.lesson_id else {
        return validation_failure("lessonId is required");
    };

    let origin = addr.ip().to_canonical().to_string();

    match RegistrationService::register_attendance(
        state.db(),
        CheckIn {
            token: &req.token,
            lesson_id,
            student_id: &req.student_id,
            origin: &origin,
        },
    )
    .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Attendance recorded")),
        ),
        Err(e) => service_error(e),
    }
}
