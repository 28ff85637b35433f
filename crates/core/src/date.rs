//! Timestamp formatting for values stored in string columns.

use chrono::{DateTime, Utc};

/// Layout of `users.date_created`.
pub const DB_DATE_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Current UTC time in [`DB_DATE_LAYOUT`].
pub fn now_db_format() -> String {
    format_db(Utc::now())
}

/// `at` in [`DB_DATE_LAYOUT`].
pub fn format_db(at: DateTime<Utc>) -> String {
    at.format(DB_DATE_LAYOUT).to_string()
}
