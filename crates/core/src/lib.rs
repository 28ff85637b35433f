//! Domain building blocks shared by the users service crates.
//!
//! Nothing in here performs I/O: the error taxonomy, id/time helpers and the
//! field rules for user input all live here so both the data-access crate and
//! the HTTP crate agree on them.

pub mod date;
pub mod error;
pub mod types;
pub mod user;
