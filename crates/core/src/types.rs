/// Primary keys of the `users` table are auto-increment integers.
pub type DbId = i64;
