//! Row structs and their API views.

pub mod user;
