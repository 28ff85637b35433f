pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Every route the service exposes.
///
/// ```text
/// /health                           service + database health
/// /users, /users/{user_id}          user CRUD
/// /internal/users/search            users by status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(users::router())
}
