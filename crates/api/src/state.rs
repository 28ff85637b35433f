use std::sync::Arc;

use users_db::repositories::UserRepo;
use users_db::DbPool;

use crate::config::ServerConfig;
use crate::services::users::UserService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted and the config sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
    pub users: UserService,
}

impl AppState {
    /// Wire the service stack on top of `pool`.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        let users = UserService::new(UserRepo::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            users,
        }
    }
}
