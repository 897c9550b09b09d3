use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::model::ValidationError;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// stored in place of a window bound whose text was not a time of day.
const UNPARSED_MINUTE: u16 = u16::MAX;

/// whether the listed windows are when the zone applies or when it does not.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RestrictionMode {
    #[default]
    Allow,
    Deny,
}

/// a half-open [start, end) range of minute-of-day values. when end < start
/// the range wraps through midnight. serialized as "HH:MM" strings; "24:00"
/// is accepted as an end value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HourRange {
    #[serde(with = "minute_of_day_codec")]
    pub start: u16,
    #[serde(with = "minute_of_day_codec")]
    pub end: u16,
}

impl HourRange {
    pub fn new(start: u16, end: u16) -> HourRange {
        HourRange { start, end }
    }

    pub fn from_hours(start_hour: u16, end_hour: u16) -> HourRange {
        HourRange::new(start_hour * 60, end_hour * 60)
    }

    pub fn wraps_midnight(&self) -> bool {
        self.end < self.start
    }

    pub fn contains_minute(&self, minute: u16) -> bool {
        if self.wraps_midnight() {
            minute >= self.start || minute < self.end
        } else {
            self.start <= minute && minute < self.end
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start >= MINUTES_PER_DAY {
            return Err(ValidationError::InvalidTimeRestriction(format!(
                "window start {} is not a valid time of day, expected HH:MM from 00:00 to 23:59",
                minute_of_day_codec::format(self.start)
            )));
        }
        if self.end > MINUTES_PER_DAY {
            return Err(ValidationError::InvalidTimeRestriction(format!(
                "window end {} is not a valid time of day, expected HH:MM from 00:00 to 24:00",
                minute_of_day_codec::format(self.end)
            )));
        }
        if self.start == self.end {
            return Err(ValidationError::InvalidTimeRestriction(format!(
                "window {self} is empty"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for HourRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            minute_of_day_codec::format(self.start),
            minute_of_day_codec::format(self.end)
        )
    }
}

/// narrows when a geofence's policy applies. `days` scopes the windows to
/// specific weekdays, when absent the windows apply every day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeRestriction {
    #[serde(default)]
    pub mode: RestrictionMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<Weekday>>,
    pub windows: Vec<HourRange>,
}

impl TimeRestriction {
    /// an allow-mode restriction applying every day of the week
    pub fn daily(windows: Vec<HourRange>) -> TimeRestriction {
        TimeRestriction {
            mode: RestrictionMode::Allow,
            days: None,
            windows,
        }
    }

    pub fn on_days(mut self, days: Vec<Weekday>) -> TimeRestriction {
        self.days = Some(days);
        self
    }

    pub fn with_mode(mut self, mode: RestrictionMode) -> TimeRestriction {
        self.mode = mode;
        self
    }

    /// true if the windows are scoped to this weekday.
    pub fn applies_on(&self, day: Weekday) -> bool {
        match &self.days {
            None => true,
            Some(days) => days.contains(&day),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(days) = &self.days {
            if days.is_empty() {
                return Err(ValidationError::InvalidTimeRestriction(String::from(
                    "day-of-week set is empty",
                )));
            }
        }
        if self.windows.is_empty() {
            return Err(ValidationError::InvalidTimeRestriction(String::from(
                "at least one hour window is required",
            )));
        }
        for window in self.windows.iter() {
            window.validate()?;
        }
        Ok(())
    }
}

mod minute_of_day_codec {
    use serde::Deserialize;

    pub fn format(minute: u16) -> String {
        if minute == super::UNPARSED_MINUTE {
            return String::from("(unparsed)");
        }
        format!("{:02}:{:02}", minute / 60, minute % 60)
    }

    /// minute-of-day value of an "HH:MM" string. text that is not a time of day
    /// maps to [`super::UNPARSED_MINUTE`] so that `HourRange::validate` reports it.
    pub fn parse(s: &str) -> u16 {
        parse_hh_mm(s).unwrap_or(super::UNPARSED_MINUTE)
    }

    fn parse_hh_mm(s: &str) -> Option<u16> {
        let (h, m) = s.trim().split_once(':')?;
        let hours: u32 = h.parse().ok()?;
        let minutes: u32 = m.parse().ok()?;
        if minutes >= 60 {
            return None;
        }
        let total = hours.checked_mul(60)?.checked_add(minutes)?;
        u16::try_from(total).ok()
    }

    pub fn serialize<S>(t: &u16, s: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        s.serialize_str(&format(*t))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<u16, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        Ok(parse(&s))
    }
}
