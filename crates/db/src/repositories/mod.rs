//! Repository layer.
//!
//! Repositories own a clone of the injected [`DbPool`](crate::DbPool) and
//! translate each statement outcome into a value or a
//! [`RestError`](users_core::error::RestError).

pub mod user_repo;

pub use user_repo::UserRepo;
