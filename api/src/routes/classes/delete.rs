use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{class, student};
use services::ServiceError;
use tracing::info;
use util::state::AppState;

use crate::response::{ApiResponse, Empty, service_error};
use crate::routes::extractors::PathParams;

/// DELETE /api/classes/{class_id}
///
/// Removes the class together with its students, lessons, attendance, tokens and
/// device registrations.
pub async fn delete_class(
    State(state): State<AppState>,
    PathParams(class_id): PathParams<i64>,
) -> impl IntoResponse {
    match class::Model::delete_by_id(state.db(), class_id).await {
        Ok(true) => {
            info!(class_id, "Class deleted");
            (StatusCode::OK, Json(ApiResponse::success(Empty, "Class deleted")))
        }
        Ok(false) => service_error(ServiceError::class_not_found(class_id)),
        Err(e) => service_error(ServiceError::from(e)),
    }
}

/// DELETE /api/classes/{class_id}/students/{student_id}
pub async fn remove_student(
    State(state): State<AppState>,
    PathParams((class_id, student_id)): PathParams<(i64, String)>,
) -> impl IntoResponse {
    match student::Model::delete_by_id(state.db(), class_id, &student_id).await {
        Ok(true) => (StatusCode::OK, Json(ApiResponse::success(Empty, "Student removed"))),
        Ok(false) => service_error(ServiceError::NotFound(format!(
            "Student {student_id} not found in class {class_id}"
        ))),
        Err(e) => service_error(ServiceError::from(e)),
    }
}
