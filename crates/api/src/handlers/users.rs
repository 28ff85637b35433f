//! Handlers for the `/users` resource.
//!
//! Bodies and path ids are extracted leniently and turned into
//! [`RestError::bad_request`] here, so every client mistake gets the same
//! JSON error shape as failures further down.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use users_core::error::RestError;
use users_core::types::DbId;
use users_db::models::user::{marshall_all, User, UserView};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Header that selects the public view of users.
pub const PUBLIC_HEADER: &str = "x-public";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
}

fn is_public(headers: &HeaderMap) -> bool {
    headers
        .get(PUBLIC_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

fn parse_user_id(raw: &str) -> Result<DbId, RestError> {
    raw.parse::<DbId>()
        .map_err(|_| RestError::bad_request("user id should be a number"))
}

fn json_body(body: Result<Json<User>, JsonRejection>) -> Result<User, RestError> {
    body.map(|Json(user)| user).map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected user body");
        RestError::bad_request("invalid json body")
    })
}

/// POST /users
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<User>, JsonRejection>,
) -> AppResult<(StatusCode, Json<UserView>)> {
    let user = json_body(body)?;
    let created = state.users.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(created.marshall(is_public(&headers)))))
}

/// GET /users/{user_id}
///
/// Not available yet; answers 501 once the id is known to be valid.
pub async fn get(Path(user_id): Path<String>) -> AppError {
    match parse_user_id(&user_id) {
        Err(err) => err.into(),
        Ok(_) => RestError::not_implemented("get user is not implemented").into(),
    }
}

/// PUT /users/{user_id}
pub async fn update(
    state: State<AppState>,
    headers: HeaderMap,
    path: Path<String>,
    body: Result<Json<User>, JsonRejection>,
) -> AppResult<Json<UserView>> {
    apply_update(state, &headers, path, body, false).await
}

/// PATCH /users/{user_id}
pub async fn patch(
    state: State<AppState>,
    headers: HeaderMap,
    path: Path<String>,
    body: Result<Json<User>, JsonRejection>,
) -> AppResult<Json<UserView>> {
    apply_update(state, &headers, path, body, true).await
}

async fn apply_update(
    State(state): State<AppState>,
    headers: &HeaderMap,
    Path(user_id): Path<String>,
    body: Result<Json<User>, JsonRejection>,
    is_partial: bool,
) -> AppResult<Json<UserView>> {
    let id = parse_user_id(&user_id)?;
    let mut changes = json_body(body)?;
    changes.id = id;

    let updated = state.users.update_user(is_partial, changes).await?;
    Ok(Json(updated.marshall(is_public(headers))))
}

/// DELETE /users/{user_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_user_id(&user_id)?;
    state.users.delete_user(id).await?;
    Ok(Json(DeleteResponse { status: "deleted" }))
}

/// GET /internal/users/search?status=...
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<Vec<UserView>>> {
    let status = params
        .ok()
        .and_then(|Query(p)| p.status)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| RestError::bad_request("status query parameter is required"))?;

    let users = state.users.search_users(&status).await?;
    Ok(Json(marshall_all(&users, is_public(&headers))))
}
