use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::common::trimmed;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClassRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Class name is required"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "student_id is required"))]
    pub student_id: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLessonRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Lesson date is required"))]
    pub date: String,
}

#[derive(Debug, Serialize, Default)]
pub struct ClassResponse {
    pub id: i64,
    pub name: String,
    pub student_count: i64,
}

impl From<db::models::class::ClassSummary> for ClassResponse {
    fn from(c: db::models::class::ClassSummary) -> Self {
        Self {
            id: c.id,
            name: c.name,
            student_count: c.student_count,
        }
    }
}

impl From<db::models::class::Model> for ClassResponse {
    fn from(c: db::models::class::Model) -> Self {
        Self {
            id: c.id,
            name: c.name,
            student_count: 0,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct StudentResponse {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub class_id: i64,
}

impl From<db::models::student::Model> for StudentResponse {
    fn from(s: db::models::student::Model) -> Self {
        Self {
            student_id: s.student_id,
            first_name: s.first_name,
            last_name: s.last_name,
            class_id: s.class_id,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct LessonResponse {
    pub id: i64,
    pub class_id: i64,
    pub date: String,
    /// Attendance rows created along with the lesson. Only set on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeded: Option<u64>,
}

impl From<db::models::lesson::Model> for LessonResponse {
    fn from(l: db::models::lesson::Model) -> Self {
        Self {
            id: l.id,
            class_id: l.class_id,
            date: l.date,
            seeded: None,
        }
    }
}
