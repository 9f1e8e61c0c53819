use chrono::{DateTime, TimeZone, Utc};

/// 1989-10-09 00:00:00 UTC in milliseconds since Unix epoch.
pub const BIRTHDAY_MS: i64 = 623_894_400_000;

/// 1989-10-09 00:00:00 UTC.
pub fn birthday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1989, 10, 9, 0, 0, 0).unwrap()
}
