//! User entity model and its public/private views.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use users_core::types::DbId;

/// One row of the `users` table.
///
/// Doubles as the request body for create/update: missing JSON fields fall
/// back to empty values and validation happens in the service layer.
/// `password` is accepted on input but never serialized and never selected
/// back from the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct User {
    pub id: DbId,
    #[sqlx(rename = "firstname")]
    pub first_name: String,
    #[sqlx(rename = "lastname")]
    pub last_name: String,
    pub email: String,
    pub date_created: String,
    pub status: String,
    #[serde(skip_serializing)]
    #[sqlx(skip)]
    pub password: String,
}

/// What anonymous callers may see (`X-Public: true`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: DbId,
    pub date_created: String,
    pub status: String,
}

/// Full user representation for trusted callers, still without the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrivateUser {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_created: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserView {
    Public(PublicUser),
    Private(PrivateUser),
}

impl User {
    /// The public view (`id`, `date_created`, `status`) or the full private one.
    pub fn marshall(&self, is_public: bool) -> UserView {
        if is_public {
            UserView::Public(PublicUser {
                id: self.id,
                date_created: self.date_created.clone(),
                status: self.status.clone(),
            })
        } else {
            UserView::Private(PrivateUser {
                id: self.id,
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                email: self.email.clone(),
                date_created: self.date_created.clone(),
                status: self.status.clone(),
            })
        }
    }
}

/// [`User::marshall`] applied to each user, order kept.
pub fn marshall_all(users: &[User], is_public: bool) -> Vec<UserView> {
    users.iter().map(|u| u.marshall(is_public)).collect()
}
