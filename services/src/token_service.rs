use chrono::{DateTime, Utc};
use db::models::{lesson, lesson_token};
use rand::Rng;
use sea_orm::DbConn;
use serde::Serialize;
use std::net::IpAddr;
use subtle::ConstantTimeEq;
use tracing::info;
use util::network::resolve_lan_address;

use crate::error::ServiceError;

pub use db::models::lesson_token::Model as LessonToken;

/// Length of a check-in token.
pub const TOKEN_LENGTH: usize = 10;

/// Uppercase alphanumerics, so a token can be read off a projector and typed back.
const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// What the dashboard needs to render a check-in code.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub lesson_id: i64,
    pub class_id: i64,
    pub created_at: DateTime<Utc>,
    pub address: IpAddr,
}

pub struct TokenService;

impl TokenService {
    /// Mints a fresh token for the lesson, replacing any previous one.
    ///
    /// The old value stops verifying as soon as this returns.
    pub async fn issue_token(db: &DbConn, lesson_id: i64) -> Result<IssuedToken, ServiceError> {
        let lesson = lesson::Model::find(db, lesson_id)
            .await?
            .ok_or_else(|| ServiceError::lesson_not_found(lesson_id))?;

        let token = generate_token();
        let saved = lesson_token::Model::upsert(db, lesson.id, &token, Utc::now()).await?;

        info!(lesson_id, class_id = lesson.class_id, "Issued check-in token");

        Ok(IssuedToken {
            token: saved.token,
            lesson_id: lesson.id,
            class_id: lesson.class_id,
            created_at: saved.created_at,
            address: resolve_lan_address(),
        })
    }

    /// The lesson's live token and the lesson's class, without rotating the token.
    pub async fn current_token(
        db: &DbConn,
        lesson_id: i64,
    ) -> Result<(LessonToken, i64), ServiceError> {
        let lesson = lesson::Model::find(db, lesson_id)
            .await?
            .ok_or_else(|| ServiceError::lesson_not_found(lesson_id))?;

        let live = lesson_token::Model::find_for_lesson(db, lesson_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("No active token for this lesson".into()))?;

        Ok((live, lesson.class_id))
    }

    pub async fn revoke_token(db: &DbConn, lesson_id: i64) -> Result<(), ServiceError> {
        lesson::Model::find(db, lesson_id)
            .await?
            .ok_or_else(|| ServiceError::lesson_not_found(lesson_id))?;

        if !lesson_token::Model::delete_for_lesson(db, lesson_id).await? {
            return Err(ServiceError::NotFound(
                "No active token for this lesson".into(),
            ));
        }

        info!(lesson_id, "Revoked check-in token");
        Ok(())
    }
}

/// Draws `TOKEN_LENGTH` characters uniformly from `A-Z0-9` using the thread RNG.
pub fn generate_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LENGTH)
        .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}

/// Compares a presented token against the stored one without short-circuiting on
/// the first differing byte.
pub fn tokens_match(presented: &str, stored: &str) -> bool {
    presented.as_bytes().ct_eq(stored.as_bytes()).into()
}
