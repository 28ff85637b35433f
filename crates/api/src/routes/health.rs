use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database answers and the `users` table is readable,
    /// `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub users_table: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = users_db::health_check(&state.pool).await.is_ok();
    let users_table = db_healthy && users_db::users_table_check(&state.pool).await.is_ok();
    if !users_table {
        tracing::warn!(db_healthy, "users table is not readable");
    }

    Json(HealthResponse {
        status: if users_table { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        users_table,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
