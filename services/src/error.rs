use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure of a service operation.
///
/// `kind()` is the stable, machine-readable name sent to clients; the `Display`
/// text is the human-readable message.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("This device has already been used to check in for this lesson")]
    DuplicateOrigin,

    #[error("Student is not enrolled in this lesson's class")]
    StudentNotEnrolled,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),
}

impl ServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "ValidationError",
            ServiceError::NotFound(_) => "NotFound",
            ServiceError::InvalidToken => "InvalidToken",
            ServiceError::DuplicateOrigin => "DuplicateOrigin",
            ServiceError::StudentNotEnrolled => "StudentNotEnrolled",
            ServiceError::Conflict(_) => "Conflict",
            ServiceError::Forbidden(_) => "Forbidden",
            ServiceError::Storage(_) => "StorageError",
        }
    }

    pub fn lesson_not_found(lesson_id: i64) -> Self {
        ServiceError::NotFound(format!("Lesson {lesson_id} not found"))
    }

    pub fn class_not_found(class_id: i64) -> Self {
        ServiceError::NotFound(format!("Class {class_id} not found"))
    }
}

/// True when `err` was raised by a UNIQUE (or primary key) constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => true,
        _ => err.to_string().contains("UNIQUE constraint failed"),
    }
}
