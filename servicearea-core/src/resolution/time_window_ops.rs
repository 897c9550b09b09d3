use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike, Utc};

use crate::model::{RestrictionMode, TimeRestriction};

/// converts a query instant to wall-clock time in the service area.
pub fn to_local(at: &DateTime<Utc>, utc_offset: &FixedOffset) -> NaiveDateTime {
    at.with_timezone(utc_offset).naive_local()
}

/// minute of the day in [0, 1440).
pub fn minute_of_day(local: &NaiveDateTime) -> u16 {
    (local.hour() * 60 + local.minute()) as u16
}

/// tests whether a zone's restriction lets its policy apply at this local time.
/// a zone without a restriction is always active. the weekday is checked before
/// the hour windows, and windows ending before they start wrap through midnight.
pub fn is_active_at(restriction: Option<&TimeRestriction>, local: &NaiveDateTime) -> bool {
    let restriction = match restriction {
        None => return true,
        Some(r) => r,
    };
    let scheduled_day = restriction.applies_on(local.weekday());
    let minute = minute_of_day(local);
    let in_window = scheduled_day
        && restriction
            .windows
            .iter()
            .any(|window| window.contains_minute(minute));
    match restriction.mode {
        RestrictionMode::Allow => in_window,
        RestrictionMode::Deny => !in_window,
    }
}
