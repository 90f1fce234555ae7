use db::models::{attendance, class, lesson};
use sea_orm::{DbConn, TransactionTrait};
use tracing::info;

use crate::error::ServiceError;

pub use db::models::lesson::Model as Lesson;

pub struct LessonService;

impl LessonService {
    /// Creates a lesson and seeds an absent attendance row for every student
    /// currently in the class. Both happen in one transaction.
    ///
    /// Returns the lesson and the number of rows seeded.
    pub async fn create_lesson(
        db: &DbConn,
        class_id: i64,
        date: &str,
    ) -> Result<(Lesson, u64), ServiceError> {
        let date = date.trim();
        if date.is_empty() {
            return Err(ServiceError::Validation("Lesson date is required".into()));
        }

        let txn = db.begin().await?;

        if class::Model::find(&txn, class_id).await?.is_none() {
            return Err(ServiceError::class_not_found(class_id));
        }

        let created = lesson::Model::create(&txn, class_id, date).await?;
        let seeded = attendance::Model::seed_missing(&txn, created.id, class_id).await?;

        txn.commit().await?;

        info!(lesson_id = created.id, class_id, seeded, "Lesson created");
        Ok((created, seeded))
    }
}
