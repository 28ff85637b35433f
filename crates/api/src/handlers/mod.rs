//! Request handlers.
//!
//! Handlers bind the request, call the matching service method and map
//! errors via [`AppError`](crate::error::AppError).

pub mod users;
