//! Repository for the `users` table.
//!
//! Every operation acquires a pooled connection, prepares its fixed
//! statement on it and executes once. The statement, any open row stream and
//! the connection are dropped on every return path. Driver errors are logged
//! here and replaced by [`RestError::server_error`] so backend detail never
//! reaches callers.

use futures::TryStreamExt;
use sqlx::pool::PoolConnection;
use sqlx::{Any, Executor, Statement};
use users_core::error::RestError;
use users_core::types::DbId;

use crate::models::user::User;
use crate::DbPool;

const QUERY_INSERT_USER: &str = "INSERT INTO users(firstname, lastname, email, date_created, status, password) VALUES(?, ?, ?, ?, ?, ?);";
const QUERY_GET_USER: &str =
    "SELECT id, firstname, lastname, email, date_created, status FROM users WHERE id=?;";
const QUERY_UPDATE_USER: &str = "UPDATE users SET firstname=?, lastname=?, email=? WHERE id=?;";
const QUERY_DELETE_USER: &str = "DELETE FROM users where id=?;";
const QUERY_FIND_USERS_BY_STATUS: &str =
    "SELECT id, firstname, lastname, email, date_created, status FROM users WHERE status=?;";

const QUERY_LAST_INSERT_ROWID: &str = "SELECT last_insert_rowid();";
const SQLITE_BACKEND: &str = "SQLite";

/// Log the driver error and collapse it to the generic 500.
fn server_error(err: &sqlx::Error, context: &str) -> RestError {
    tracing::error!(error = %err, "{context}");
    RestError::server_error()
}

/// SQLite does not report the inserted id through the `Any` driver, so ask
/// the connection that ran the insert. Other backends have nothing to add.
async fn last_insert_rowid(conn: &mut PoolConnection<Any>) -> Result<Option<DbId>, RestError> {
    if conn.backend_name() != SQLITE_BACKEND {
        return Ok(None);
    }
    sqlx::query_scalar::<_, DbId>(QUERY_LAST_INSERT_ROWID)
        .fetch_optional(&mut **conn)
        .await
        .map_err(|e| server_error(&e, "error when trying to read last insert rowid"))
}

/// CRUD operations for users over an injected pool.
#[derive(Clone)]
pub struct UserRepo {
    pool: DbPool,
}

impl UserRepo {
    /// Build a repository over `pool`; nothing is global.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn acquire(&self) -> Result<PoolConnection<Any>, RestError> {
        self.pool
            .acquire()
            .await
            .map_err(|e| server_error(&e, "error when trying to acquire a database connection"))
    }

    /// Insert `user` and set its `id` to the engine-assigned value.
    ///
    /// `password` is written as given; hashing is the caller's job.
    pub async fn save(&self, user: &mut User) -> Result<(), RestError> {
        let mut conn = self.acquire().await?;
        let stmt = (&mut *conn)
            .prepare(QUERY_INSERT_USER)
            .await
            .map_err(|e| server_error(&e, "error when trying to prepare save user statement"))?;

        let result = stmt
            .query()
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.date_created)
            .bind(&user.status)
            .bind(&user.password)
            .execute(&mut *conn)
            .await
            .map_err(|e| server_error(&e, "error when trying to save user"))?;

        let id = match result.last_insert_id() {
            Some(id) => Some(id),
            None => last_insert_rowid(&mut conn).await?,
        };
        let Some(id) = id else {
            tracing::error!("error when trying to get last insert id after creating a new user");
            return Err(RestError::server_error());
        };
        user.id = id;
        tracing::debug!(user_id = id, "user saved");
        Ok(())
    }

    /// Load the user with `id`. The returned entity has an empty password.
    ///
    /// A missing row is reported as a 500 like any other query failure; there
    /// is no separate not-found signal here.
    pub async fn get(&self, id: DbId) -> Result<User, RestError> {
        let mut conn = self.acquire().await?;
        let stmt = (&mut *conn)
            .prepare(QUERY_GET_USER)
            .await
            .map_err(|e| server_error(&e, "error when trying to prepare get user statement"))?;

        stmt.query_as::<User>()
            .bind(id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| server_error(&e, "error when trying to get user by id"))
    }

    /// Write first name, last name and email of `user` to the row with its id.
    ///
    /// Status and password are untouched. Zero affected rows is not an error.
    pub async fn update(&self, user: &User) -> Result<(), RestError> {
        let mut conn = self.acquire().await?;
        let stmt = (&mut *conn)
            .prepare(QUERY_UPDATE_USER)
            .await
            .map_err(|e| server_error(&e, "error when trying to prepare update user statement"))?;

        stmt.query()
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(user.id)
            .execute(&mut *conn)
            .await
            .map_err(|e| server_error(&e, "error when trying to update user"))?;
        Ok(())
    }

    /// Delete the row with `id`. Deleting an absent row succeeds.
    pub async fn delete(&self, id: DbId) -> Result<(), RestError> {
        let mut conn = self.acquire().await?;
        let stmt = (&mut *conn)
            .prepare(QUERY_DELETE_USER)
            .await
            .map_err(|e| server_error(&e, "error when trying to prepare delete user statement"))?;

        stmt.query()
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| server_error(&e, "error when trying to delete user"))?;
        Ok(())
    }

    /// All users whose status equals `status`, in cursor order.
    ///
    /// Returns 404 when nothing matches.
    pub async fn find_by_status(&self, status: &str) -> Result<Vec<User>, RestError> {
        let mut conn = self.acquire().await?;
        let stmt = (&mut *conn).prepare(QUERY_FIND_USERS_BY_STATUS).await.map_err(|e| {
            server_error(&e, "error when trying to prepare find users by status statement")
        })?;

        let mut results = Vec::new();
        {
            let mut rows = stmt.query_as::<User>().bind(status).fetch(&mut *conn);
            while let Some(user) = rows
                .try_next()
                .await
                .map_err(|e| server_error(&e, "error when trying to find users by status"))?
            {
                results.push(user);
            }
        }

        if results.is_empty() {
            return Err(RestError::not_found(format!(
                "no users matching status {status}"
            )));
        }
        Ok(results)
    }
}
