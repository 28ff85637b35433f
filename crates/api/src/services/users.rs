//! User lifecycle: validation, defaults and hashing in front of [`UserRepo`].
//!
//! Every method returns either the resulting entity or exactly one
//! [`RestError`]; repository errors are passed through untouched.

use users_core::date::now_db_format;
use users_core::error::RestError;
use users_core::types::DbId;
use users_core::user::{normalize_email, normalize_name, normalize_password, status_or_default};
use users_db::models::user::User;
use users_db::repositories::UserRepo;

use crate::auth::password::hash_password;

#[derive(Clone)]
pub struct UserService {
    repo: UserRepo,
}

impl UserService {
    pub fn new(repo: UserRepo) -> Self {
        Self { repo }
    }

    /// Validate and store a new user.
    ///
    /// The id and creation date are assigned here regardless of what the
    /// request carried; an empty status becomes `"active"`. The password is
    /// stored as an Argon2id hash and cleared from the returned entity.
    pub async fn create_user(&self, mut user: User) -> Result<User, RestError> {
        user.email = normalize_email(&user.email)?;
        let password = normalize_password(&user.password)?;
        user.first_name = normalize_name(&user.first_name);
        user.last_name = normalize_name(&user.last_name);
        user.status = status_or_default(&user.status);

        user.password = hash_password(&password).map_err(|e| {
            tracing::error!(error = %e, "error when trying to hash user password");
            RestError::server_error()
        })?;
        user.id = 0;
        user.date_created = now_db_format();

        self.repo.save(&mut user).await?;
        user.password.clear();

        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Load one user; a missing id is a 500 like any lookup failure.
    pub async fn get_user(&self, id: DbId) -> Result<User, RestError> {
        self.repo.get(id).await
    }

    /// Apply `changes` to the stored user with `changes.id`.
    ///
    /// A full update replaces first name, last name and email; a partial one
    /// only copies fields that are non-empty. Status and password never
    /// change here.
    pub async fn update_user(&self, is_partial: bool, changes: User) -> Result<User, RestError> {
        let email = if is_partial && changes.email.trim().is_empty() {
            None
        } else {
            Some(normalize_email(&changes.email)?)
        };

        let mut current = self.repo.get(changes.id).await?;

        if is_partial {
            if !changes.first_name.trim().is_empty() {
                current.first_name = normalize_name(&changes.first_name);
            }
            if !changes.last_name.trim().is_empty() {
                current.last_name = normalize_name(&changes.last_name);
            }
        } else {
            current.first_name = normalize_name(&changes.first_name);
            current.last_name = normalize_name(&changes.last_name);
        }
        if let Some(email) = email {
            current.email = email;
        }

        self.repo.update(&current).await?;
        Ok(current)
    }

    /// Delete by id. Absent users are not an error.
    pub async fn delete_user(&self, id: DbId) -> Result<(), RestError> {
        self.repo.delete(id).await
    }

    /// Users with the given status; 404 when none match.
    pub async fn search_users(&self, status: &str) -> Result<Vec<User>, RestError> {
        self.repo.find_by_status(status).await
    }
}
