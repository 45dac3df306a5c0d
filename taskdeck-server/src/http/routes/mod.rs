//! Route handlers organized by resource

pub mod fallback;
pub mod health;
pub mod root;
pub mod todos;
pub mod users;

use axum::http::StatusCode;
use axum::Json;

use super::envelope::Envelope;
use super::error::ApiError;

/// Status plus envelope, or an error that renders as one
pub type ApiResult<T> = Result<(StatusCode, Json<Envelope<T>>), ApiError>;
