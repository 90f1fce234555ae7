//! Attendance workflows that span more than one table.
//!
//! Plain reads and single-row writes stay on the `db` models; anything that needs a
//! transaction, a secret or a cross-table rule lives here.

pub mod attendance_service;
pub mod error;
pub mod lesson_service;
pub mod registration_service;
pub mod token_service;

pub use error::ServiceError;
