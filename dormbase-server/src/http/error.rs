//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Raw store detail never reaches a body; `DbError` classification already
//! logged it. Procedure SIGNAL messages are the one deliberate exception,
//! surfaced because the store authors them for the caller.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use dormbase_core::{PolicyViolation, ValidationError};

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Shallow request validation failed (400)
    Validation(ValidationError),

    /// Body was not valid JSON for the route's input shape (400)
    InvalidBody { message: String },

    /// Advisory assignment check refused the request (409)
    Policy(PolicyViolation),

    /// Classified store failure (409/422/503/500)
    Db(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::InvalidBody { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_body",
                    "message": message
                }),
            ),
            Self::Policy(e) => (
                StatusCode::CONFLICT,
                json!({
                    "error": "rule_violation",
                    "message": e.to_string()
                }),
            ),
            Self::Db(e) => {
                let (status, kind) = match e {
                    DbError::Rejected { .. } => (StatusCode::CONFLICT, "rule_violation"),
                    DbError::Duplicate => (StatusCode::CONFLICT, "duplicate"),
                    DbError::Constraint => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "constraint_violation")
                    }
                    DbError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
                    DbError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
                };
                (
                    status,
                    json!({
                        "error": kind,
                        "message": e.to_string()
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<PolicyViolation> for ApiError {
    fn from(e: PolicyViolation) -> Self {
        Self::Policy(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Db(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            message: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty {
            field: "building_name",
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn policy_violation_is_409() {
        let err = ApiError::Policy(PolicyViolation::RoomFull {
            capacity: 2,
            occupants: 2,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn procedure_rejection_is_409() {
        let err = ApiError::Db(DbError::Rejected {
            message: "Room is already at full capacity".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn duplicate_is_409() {
        let response = ApiError::Db(DbError::Duplicate).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn constraint_violation_is_422() {
        let response = ApiError::Db(DbError::Constraint).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unavailable_is_503() {
        let response = ApiError::Db(DbError::Unavailable).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn internal_is_500_with_generic_message() {
        let response = ApiError::Db(DbError::Internal).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "store operation failed");
    }
}
