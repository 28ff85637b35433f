//! Orchestration between request handlers and repositories.

pub mod users;
