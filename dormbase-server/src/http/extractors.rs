//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use axum::Json;

use dormbase_core::ValidationError;

use super::error::ApiError;

/// Extract an integer record id from the path, rejecting before any store
/// call when the segment does not parse.
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        match raw.parse::<i64>() {
            Ok(id) => Ok(Self(id)),
            Err(_) => Err(ApiError::Validation(ValidationError::NotAnId {
                field: "id",
                value: raw,
            })),
        }
    }
}

/// JSON body whose rejection carries the same JSON error shape as every
/// other failure, instead of axum's plain-text default.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);
