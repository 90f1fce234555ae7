use db::models::{attendance, lesson};
use sea_orm::{ConnectionTrait, DbConn};
use tracing::info;

use crate::error::ServiceError;

pub use db::models::attendance::RosterEntry;

pub struct AttendanceService;

impl AttendanceService {
    /// Adds an absent row for every student of the lesson's class that has none yet.
    /// Returns how many rows were added; a second call without membership changes
    /// adds nothing.
    pub async fn synchronize(db: &DbConn, lesson_id: i64) -> Result<u64, ServiceError> {
        let lesson = Self::lesson(db, lesson_id).await?;
        let added = attendance::Model::seed_missing(db, lesson.id, lesson.class_id).await?;

        if added > 0 {
            info!(lesson_id, added, "Attendance synchronized");
        }
        Ok(added)
    }

    /// Manually marks a student present or absent.
    pub async fn toggle(
        db: &DbConn,
        lesson_id: i64,
        student_id: &str,
        present: bool,
    ) -> Result<(), ServiceError> {
        let lesson = Self::lesson(db, lesson_id).await?;

        let updated =
            attendance::Model::set_presence(db, lesson.id, lesson.class_id, student_id, present)
                .await?;
        if !updated {
            return Err(ServiceError::NotFound(format!(
                "No attendance entry for student {student_id} in lesson {lesson_id}"
            )));
        }
        Ok(())
    }

    pub async fn roster(db: &DbConn, lesson_id: i64) -> Result<Vec<RosterEntry>, ServiceError> {
        let lesson = Self::lesson(db, lesson_id).await?;
        Ok(attendance::Model::roster(db, lesson.id, lesson.class_id).await?)
    }

    async fn lesson<C>(db: &C, lesson_id: i64) -> Result<lesson::Model, ServiceError>
    where
        C: ConnectionTrait,
    {
        lesson::Model::find(db, lesson_id)
            .await?
            .ok_or_else(|| ServiceError::lesson_not_found(lesson_id))
    }
}
