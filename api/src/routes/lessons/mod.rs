//! `/api/lessons` route group: lesson removal, the attendance register and the
//! check-in token.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use common::{AttendanceEntryResponse, SyncResponse, TokenResponse};
pub use delete::{delete_lesson, revoke_token};
pub use get::{get_attendance, get_token};
pub use post::{issue_token, sync_attendance};
pub use put::set_attendance;

pub fn lessons_routes() -> Router<AppState> {
    Router::new()
        .route("/{lesson_id}", delete(delete_lesson))
        .route("/{lesson_id}/attendance", get(get_attendance))
        .route("/{lesson_id}/attendance/sync", post(sync_attendance))
        .route("/{lesson_id}/attendance/{student_id}", put(set_attendance))
        .route(
            "/{lesson_id}/token",
            get(get_token).post(issue_token).delete(revoke_token),
        )
}
