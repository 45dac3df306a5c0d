//! API error types with IntoResponse
//!
//! Errors are converted to envelopes with the matching status code.
//! Raw database errors are logged but only reach the client when the
//! server runs with error details exposed (see `middleware`).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::envelope::Envelope;
use crate::db::DbError;
use crate::models::ValidationError;

/// Raw error text for a 500 response, stashed in response extensions
#[derive(Debug, Clone)]
pub struct ErrorDetails(pub String);

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload or path failed validation (400)
    Validation(ValidationError),

    /// Body could not be read as the expected JSON (400)
    BadRequest { message: String },

    /// Resource not found (404)
    NotFound { message: String },

    /// Unique constraint hit (409)
    Conflict { message: String },

    /// Anything else (500, logged)
    Internal { details: String },
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(e) => (status, Json(Envelope::failure(e.to_string()))).into_response(),
            Self::BadRequest { message }
            | Self::NotFound { message }
            | Self::Conflict { message } => {
                (status, Json(Envelope::failure(message))).into_response()
            }
            Self::Internal { details } => {
                tracing::error!(error = %details, "request failed");
                let mut response =
                    (status, Json(Envelope::failure("Internal server error"))).into_response();
                response.extensions_mut().insert(ErrorDetails(details));
                response
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::not_found(format!(
                "{} not found",
                capitalize(resource)
            )),
            DbError::UniqueViolation { .. } => Self::conflict("Resource already exists"),
            DbError::ForeignKeyViolation { .. } => {
                Self::not_found("Referenced resource not found")
            }
            err @ DbError::Sqlx(_) => Self::Internal {
                details: err.to_string(),
            },
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "name cannot be empty");
    }

    #[tokio::test]
    async fn db_not_found_is_404_with_resource_name() {
        let err = ApiError::from(DbError::NotFound {
            resource: "user",
            id: "4".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "User not found");
    }

    #[tokio::test]
    async fn unique_violation_is_409() {
        let err = ApiError::from(DbError::UniqueViolation {
            constraint: "users_email_key".into(),
        });
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn internal_error_hides_details_in_body() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<ErrorDetails>().is_some());

        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
        assert!(body.get("details").is_none());
    }
}
