//! `/api/classes` route group: classes, their students and their lessons.

use axum::{
    Router,
    routing::{delete, get},
};
use util::state::AppState;

mod common;
mod delete;
mod get;
mod post;

pub use common::{ClassResponse, LessonResponse, StudentResponse};
pub use delete::{delete_class, remove_student};
pub use get::{list_classes, list_lessons, list_students};
pub use post::{add_student, create_class, create_lesson};

pub fn classes_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classes).post(create_class))
        .route("/{class_id}", delete(delete_class))
        .route("/{class_id}/students", get(list_students).post(add_student))
        .route("/{class_id}/students/{student_id}", delete(remove_student))
        .route("/{class_id}/lessons", get(list_lessons).post(create_lesson))
}
