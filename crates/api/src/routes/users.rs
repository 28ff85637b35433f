//! Route definitions for the user resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes, mounted at the root.
///
/// ```text
/// POST   /users                     -> create
/// GET    /users/{user_id}           -> get (501)
/// PUT    /users/{user_id}           -> update
/// PATCH  /users/{user_id}           -> patch
/// DELETE /users/{user_id}           -> delete
/// GET    /internal/users/search     -> search (?status=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create))
        .route(
            "/users/{user_id}",
            get(users::get)
                .put(users::update)
                .patch(users::patch)
                .delete(users::delete),
        )
        .route("/internal/users/search", get(users::search))
}
