//! Data access for the `users` table.
//!
//! The pool uses sqlx's `Any` driver so the same statements run against
//! MySQL in production and an in-memory SQLite database under test.

use sqlx::any::AnyPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::AnyPool;

/// Create a connection pool from a database URL (`mysql://...`, `sqlite:...`).
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Confirm the `users` table exists and can be read.
pub async fn users_table_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1 FROM users LIMIT 1").fetch_optional(pool).await?;
    Ok(())
}
