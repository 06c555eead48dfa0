//! Time helpers
//!
//! All timestamps in the system are Unix milliseconds; handlers and
//! repositories only ever pass `i64` around.

/// Current wall-clock time in Unix milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Minutes expressed in milliseconds
pub const fn minutes_to_millis(minutes: i64) -> i64 {
    minutes * 60 * 1000
}
