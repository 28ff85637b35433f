use sqlx::any::AnyPoolOptions;
use users_db::models::user::User;
use users_db::DbPool;

/// SQLite equivalent of `schema/users.sql`.
pub const CREATE_USERS_TABLE: &str = "CREATE TABLE users (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    firstname    TEXT NOT NULL DEFAULT '',
    lastname     TEXT NOT NULL DEFAULT '',
    email        TEXT NOT NULL UNIQUE,
    date_created TEXT NOT NULL,
    status       TEXT NOT NULL,
    password     TEXT NOT NULL
)";

/// A single-connection in-memory database with an empty `users` table.
pub async fn test_pool() -> DbPool {
    pool_with_schema(CREATE_USERS_TABLE).await
}

/// A single-connection in-memory database after running `ddl`.
///
/// One connection that never expires, so every query sees the same
/// in-memory database.
pub async fn pool_with_schema(ddl: &str) -> DbPool {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query(ddl).execute(&pool).await.unwrap();
    pool
}

pub fn new_user(first: &str, email: &str, status: &str) -> User {
    User {
        id: 0,
        first_name: first.to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        date_created: "2024-01-01 10:00:00".to_string(),
        status: status.to_string(),
        password: "secret".to_string(),
    }
}

/// Read a column the repository never selects.
pub async fn stored_column(pool: &DbPool, column: &str, id: i64) -> String {
    sqlx::query_scalar::<_, String>(&format!("SELECT {column} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}
