use axum::{Json, http::StatusCode};
use serde::Serialize;
use services::ServiceError;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// Error responses also carry a machine-readable `kind`:
///
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "This device has already been used to check in for this lesson",
///   "kind": "DuplicateOrigin"
/// }
/// ```
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

/// Placeholder payload for responses that carry no data.
#[derive(Serialize, Default)]
pub struct Empty;

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
            kind: None,
        }
    }

    /// Constructs an error response with a message, a kind and default `data`.
    pub fn error(kind: &'static str, message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
            kind: Some(kind),
        }
    }
}

/// HTTP status for each service failure.
pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_)
        | ServiceError::InvalidToken
        | ServiceError::StudentNotEnrolled => StatusCode::NOT_FOUND,
        ServiceError::Forbidden(_) | ServiceError::DuplicateOrigin => StatusCode::FORBIDDEN,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts a service failure into the handler return shape.
///
/// Storage failures are logged in full and reported to the client generically.
pub fn service_error<T>(err: ServiceError) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    let status = status_for(&err);
    let message = match &err {
        ServiceError::Storage(e) => {
            tracing::error!(error = %e, "Storage failure");
            "Internal storage error".to_string()
        }
        other => other.to_string(),
    };
    (status, Json(ApiResponse::error(err.kind(), message)))
}
