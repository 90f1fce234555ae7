use chrono::Utc;
use db::models::{attendance, ip_registration, lesson, lesson_token};
use sea_orm::{ConnectionTrait, DbConn, TransactionTrait};
use tracing::{info, warn};

use crate::error::{ServiceError, is_unique_violation};
use crate::token_service::tokens_match;

/// A student's self check-in request.
#[derive(Debug, Clone)]
pub struct CheckIn<'a> {
    pub token: &'a str,
    pub lesson_id: i64,
    pub student_id: &'a str,
    /// Network origin of the request, as a canonical IP string.
    pub origin: &'a str,
}

pub struct RegistrationService;

impl RegistrationService {
    /// Verifies a check-in and marks the student present.
    ///
    /// All steps run in one transaction: the origin is only recorded if the student is
    /// also marked present, and the unique index on `(lesson_id, ip_address)` decides
    /// between concurrent check-ins from the same origin.
    pub async fn register_attendance(db: &DbConn, req: CheckIn<'_>) -> Result<(), ServiceError> {
        if req.token.trim().is_empty() {
            return Err(ServiceError::Validation("token is required".into()));
        }
        if req.student_id.trim().is_empty() {
            return Err(ServiceError::Validation("studentId is required".into()));
        }

        let txn = db.begin().await?;

        match Self::register_in(&txn, &req).await {
            Ok(()) => {
                txn.commit().await?;
                info!(
                    lesson_id = req.lesson_id,
                    student_id = req.student_id,
                    origin = req.origin,
                    "Check-in accepted"
                );
                Ok(())
            }
            Err(e) => {
                if let Err(rb) = txn.rollback().await {
                    warn!(error = %rb, "Rollback after failed check-in did not complete");
                }
                warn!(
                    lesson_id = req.lesson_id,
                    student_id = req.student_id,
                    origin = req.origin,
                    kind = e.kind(),
                    "Check-in rejected"
                );
                Err(e)
            }
        }
    }

    async fn register_in<C>(txn: &C, req: &CheckIn<'_>) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        let live = lesson_token::Model::find_for_lesson(txn, req.lesson_id)
            .await?
            .ok_or(ServiceError::InvalidToken)?;
        if !tokens_match(req.token, &live.token) {
            return Err(ServiceError::InvalidToken);
        }

        let lesson = lesson::Model::find(txn, req.lesson_id)
            .await?
            .ok_or_else(|| ServiceError::lesson_not_found(req.lesson_id))?;

        // Fast path; the insert below is authoritative.
        if ip_registration::Model::exists(txn, lesson.id, req.origin).await? {
            return Err(ServiceError::DuplicateOrigin);
        }

        Self::claim_origin(txn, lesson.id, req.origin).await?;

        let marked =
            attendance::Model::set_presence(txn, lesson.id, lesson.class_id, req.student_id, true)
                .await?;
        if !marked {
            return Err(ServiceError::StudentNotEnrolled);
        }

        Ok(())
    }

    /// Records `origin` for the lesson. A unique-index violation means another
    /// check-in from the same origin committed first.
    async fn claim_origin<C>(txn: &C, lesson_id: i64, origin: &str) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        ip_registration::Model::record(txn, lesson_id, origin, Utc::now())
            .await
            .map(|_| ())
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ServiceError::DuplicateOrigin
                } else {
                    ServiceError::Storage(e)
                }
            })
    }
}
