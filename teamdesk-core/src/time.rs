//! Reference-timezone day arithmetic.
//!
//! Recurring-series anchors are stored day-aligned in one fixed timezone so
//! that all recurrence math downstream agrees on where a day begins.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The fixed timezone all recurring-series anchors are aligned to.
pub const REFERENCE_TIMEZONE: Tz = Tz::UTC;

/// Truncate a timestamp to the start of its calendar day in the reference
/// timezone.
pub fn start_of_day(ts: DateTime<Utc>) -> DateTime<Utc> {
    day_start_in(ts, &REFERENCE_TIMEZONE)
}

/// Truncate a timestamp to the start of its calendar day in `tz`.
pub fn day_start_in(ts: DateTime<Utc>, tz: &Tz) -> DateTime<Utc> {
    let midnight = ts.with_timezone(tz).date_naive().and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        chrono::LocalResult::Single(dt) => dt.with_timezone(&Utc),
        chrono::LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        // Midnight skipped by a DST gap: keep the original instant
        chrono::LocalResult::None => ts,
    }
}
