//! Timestamp helpers for structured-data dates.
//!
//! Article nodes carry RFC 3339 timestamps derived from epoch-millisecond
//! front-matter values, falling back to the invocation-time clock.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format epoch milliseconds as an RFC 3339 UTC string.
///
/// Returns `None` for values outside the representable chrono range.
pub fn iso8601_from_millis(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}
