//! User endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};

use super::ApiResult;
use crate::db::DbError;
use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ValidId};
use crate::http::server::AppState;
use crate::models::{NewUser, User, UserPayload};

/// Duplicate email is the only unique constraint on users
fn email_conflict(e: DbError) -> ApiError {
    match e {
        DbError::UniqueViolation { .. } => ApiError::conflict("Email already exists"),
        other => other.into(),
    }
}

async fn insert(state: &AppState, payload: UserPayload, message: &str) -> ApiResult<User> {
    let user = NewUser::try_from(payload)?;
    let created = state
        .store
        .create_user(&user)
        .await
        .map_err(email_conflict)?;

    tracing::debug!(id = created.id, "user created");
    Ok((StatusCode::CREATED, Json(Envelope::ok(message, created))))
}

/// POST /users
async fn create_user(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UserPayload>,
) -> ApiResult<User> {
    insert(&state, payload, "Data Inserted Successfully").await
}

/// POST /new-user
async fn create_new_user(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UserPayload>,
) -> ApiResult<User> {
    insert(&state, payload, "New User Created Successfully").await
}

/// GET /users - every row, no ordering or paging
async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Vec<User>> {
    let users = state.store.list_users().await?;
    Ok((
        StatusCode::OK,
        Json(Envelope::ok("Users retrieved successfully", users)),
    ))
}

/// GET /users/{id}
async fn get_user(State(state): State<Arc<AppState>>, ValidId(id): ValidId) -> ApiResult<User> {
    let user = state.store.get_user(id).await?;
    Ok((
        StatusCode::OK,
        Json(Envelope::ok("User fetched successfully", user)),
    ))
}

/// PUT /users/{id} - full overwrite of name and email
async fn update_user(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ApiJson(payload): ApiJson<UserPayload>,
) -> ApiResult<User> {
    let user = NewUser::try_from(payload)?;
    let updated = state
        .store
        .update_user(id, &user)
        .await
        .map_err(email_conflict)?;

    Ok((
        StatusCode::OK,
        Json(Envelope::ok("User updated successfully", updated)),
    ))
}

/// DELETE /users/{id} - cascades to the user's todos
async fn delete_user(State(state): State<Arc<AppState>>, ValidId(id): ValidId) -> ApiResult<()> {
    state.store.delete_user(id).await?;
    Ok((
        StatusCode::OK,
        Json(Envelope::done("User deleted successfully")),
    ))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/new-user", post(create_new_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
