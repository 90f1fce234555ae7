//! Helpers shared by the route handlers.

use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidationErrors;

use crate::response::ApiResponse;

/// Joins every field error message into one human-readable line.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

pub fn validation_failure<T>(message: impl Into<String>) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error("ValidationError", message)),
    )
}

/// Maps a body that could not be parsed to a `400 ValidationError`.
pub fn rejected_body<T>(rejection: JsonRejection) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    validation_failure(format!("Invalid request body: {}", rejection.body_text()))
}

/// Deserializes an optional string field, trimming whitespace. `null` becomes empty.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default().trim().to_owned())
}

/// Accepts an id sent either as a JSON number or as a numeric string.
pub fn flexible_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {s}"))),
    }
}
