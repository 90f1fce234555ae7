//! Body and path extractors that reject with the JSON error envelope.
//!
//! axum's own `Json` and `Path` answer malformed input with plain text. These
//! wrappers turn every rejection into a `400 ValidationError` `ApiResponse`.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::response::Empty;
use crate::routes::common::{rejected_body, validation_failure};

/// JSON body extractor.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejected_body::<Empty>(rejection).into_response()),
        }
    }
}

/// Path parameter extractor.
pub struct PathParams<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParams<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(validation_failure::<Empty>(format!(
                "Invalid path: {}",
                rejection.body_text()
            ))
            .into_response()),
        }
    }
}
