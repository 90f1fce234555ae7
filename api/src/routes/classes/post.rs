use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{class, student};
use services::{ServiceError, error::is_unique_violation, lesson_service::LessonService};
use tracing::info;
use util::state::AppState;
use validator::Validate;

use super::common::{
    ClassResponse, CreateClassRequest, CreateLessonRequest, CreateStudentRequest, LessonResponse,
    StudentResponse,
};
use crate::response::{ApiResponse, service_error};
use crate::routes::extractors::{JsonBody, PathParams};
use crate::routes::common::{format_validation_errors, validation_failure};

/// POST /api/classes
///
/// ### Request Body
/// ```json
/// { "name": "5A" }
/// ```
///
/// ### Responses
/// - `201 Created` with the new class
/// - `400 Bad Request` blank name
pub async fn create_class(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateClassRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failure(format_validation_errors(&errors));
    }

    match class::Model::create(state.db(), &req.name).await {
        Ok(created) => {
            info!(class_id = created.id, "Class created");
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    ClassResponse::from(created),
                    "Class created",
                )),
            )
        }
        Err(e) => service_error(ServiceError::from(e)),
    }
}

/// POST /api/classes/{class_id}/students
///
/// ### Request Body
/// ```json
/// { "student_id": "S1029", "first_name": "Anna", "last_name": "Verdi" }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` missing field
/// - `404 Not Found` class does not exist
/// - `409 Conflict` the class already has a student with this id
///
/// Existing lessons do not get a row for the new student until they are synchronized.
pub async fn add_student(
    State(state): State<AppState>,
    PathParams(class_id): PathParams<i64>,
    JsonBody(req): JsonBody<CreateStudentRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failure(format_validation_errors(&errors));
    }

    let db = state.db();

    match class::Model::find(db, class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return service_error(ServiceError::class_not_found(class_id)),
        Err(e) => return service_error(ServiceError::from(e)),
    }

    match student::Model::create(db, class_id, &req.student_id, &req.first_name, &req.last_name)
        .await
    {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                StudentResponse::from(created),
                "Student added",
            )),
        ),
        Err(e) if is_unique_violation(&e) => service_error(ServiceError::Conflict(format!(
            "Student {} is already in this class",
            req.student_id
        ))),
        Err(e) => service_error(ServiceError::from(e)),
    }
}

/// POST /api/classes/{class_id}/lessons
///
/// ### Request Body
/// ```json
/// { "date": "2025-10-01T09:00" }
/// ```
///
/// ### Responses
/// - `201 Created` with the lesson and the number of attendance rows seeded
/// - `400 Bad Request` blank date
/// - `404 Not Found` class does not exist
pub async fn create_lesson(
    State(state): State<AppState>,
    PathParams(class_id): PathParams<i64>,
    JsonBody(req): JsonBody<CreateLessonRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failure(format_validation_errors(&errors));
    }

    match LessonService::create_lesson(state.db(), class_id, &req.date).await {
        Ok((lesson, seeded)) => {
            let mut data = LessonResponse::from(lesson);
            data.seeded = Some(seeded);
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(data, "Lesson created")),
            )
        }
        Err(e) => service_error(e),
    }
}
