//! Todo endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::ApiResult;
use crate::db::DbError;
use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{NewTodo, Todo, TodoPayload};

/// POST /todos - the owner is checked by the foreign key, not beforehand
async fn create_todo(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<TodoPayload>,
) -> ApiResult<Todo> {
    let todo = NewTodo::try_from(payload)?;
    let created = state
        .store
        .create_todo(&todo)
        .await
        .map_err(|e| match e {
            DbError::ForeignKeyViolation { .. } => ApiError::not_found("User not found"),
            other => other.into(),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Todo created successfully", created)),
    ))
}

/// GET /todos - an empty table is reported as 404
async fn list_todos(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Todo>> {
    let todos = state.store.list_todos().await?;
    if todos.is_empty() {
        return Err(ApiError::not_found("No todos found"));
    }

    Ok((
        StatusCode::OK,
        Json(Envelope::ok("Todos retrieved successfully", todos)),
    ))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/todos", get(list_todos).post(create_todo))
}
