use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{class, lesson, student};
use services::ServiceError;
use util::state::AppState;

use super::common::{ClassResponse, LessonResponse, StudentResponse};
use crate::response::{ApiResponse, service_error};
use crate::routes::extractors::PathParams;

/// GET /api/classes
///
/// Every class with the number of enrolled students, oldest first.
///
/// ```json
/// {
///   "success": true,
///   "data": [{ "id": 1, "name": "5A", "student_count": 24 }],
///   "message": "Classes retrieved"
/// }
/// ```
pub async fn list_classes(State(state): State<AppState>) -> impl IntoResponse {
    match class::Model::list_with_student_counts(state.db()).await {
        Ok(rows) => {
            let data: Vec<ClassResponse> = rows.into_iter().map(ClassResponse::from).collect();
            (StatusCode::OK, Json(ApiResponse::success(data, "Classes retrieved")))
        }
        Err(e) => service_error(ServiceError::from(e)),
    }
}

/// GET /api/classes/{class_id}/students
///
/// Students of the class sorted by last name. `404` if the class does not exist.
pub async fn list_students(
    State(state): State<AppState>,
    PathParams(class_id): PathParams<i64>,
) -> impl IntoResponse {
    let db = state.db();

    match class::Model::find(db, class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return service_error(ServiceError::class_not_found(class_id)),
        Err(e) => return service_error(ServiceError::from(e)),
    }

    match student::Model::list_for_class(db, class_id).await {
        Ok(rows) => {
            let data: Vec<StudentResponse> =
                rows.into_iter().map(StudentResponse::from).collect();
            (StatusCode::OK, Json(ApiResponse::success(data, "Students retrieved")))
        }
        Err(e) => service_error(ServiceError::from(e)),
    }
}

/// GET /api/classes/{class_id}/lessons
///
/// Lessons of the class ordered by date ascending.
pub async fn list_lessons(
    State(state): State<AppState>,
    PathParams(class_id): PathParams<i64>,
) -> impl IntoResponse {
    let db = state.db();

    match class::Model::find(db, class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return service_error(ServiceError::class_not_found(class_id)),
        Err(e) => return service_error(ServiceError::from(e)),
    }

    match lesson::Model::list_for_class(db, class_id).await {
        Ok(rows) => {
            let data: Vec<LessonResponse> = rows.into_iter().map(LessonResponse::from).collect();
            (StatusCode::OK, Json(ApiResponse::success(data, "Lessons retrieved")))
        }
        Err(e) => service_error(ServiceError::from(e)),
    }
}
