//! Clock-time formatting for report timestamps.

use chrono::DateTime;
use chrono_tz::Tz;

/// Timezone used when no other is configured.
pub const DEFAULT_TZ: Tz = chrono_tz::Asia::Kolkata;

/// Format epoch seconds as a 24-hour `HH:MM` string in Indian Standard Time.
///
/// Returns `None` when the timestamp falls outside the representable range.
pub fn format_time(timestamp: i64) -> Option<String> {
    format_time_in(timestamp, DEFAULT_TZ)
}

/// Format epoch seconds as a 24-hour `HH:MM` string in `tz`.
pub fn format_time_in(timestamp: i64, tz: Tz) -> Option<String> {
    let utc = DateTime::from_timestamp(timestamp, 0)?;
    Some(utc.with_timezone(&tz).format("%H:%M").to_string())
}
