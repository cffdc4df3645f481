//! Civil date-time handling for the sun position strategies.
//!
//! An [`Instant`] is a local wall-clock reading paired with its UTC offset.
//! Strategies read local fields (equation of time), UTC fields (ephemeris)
//! or the elapsed part of the local day (time fraction) from it.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, TimeZone, Timelike, Utc};

use crate::error::{Error, Result};

pub const SECONDS_PER_DAY: u32 = 86_400;
pub const MILLIS_PER_DAY: u32 = 86_400_000;

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

/// One-based ordinal day. `month` must be 1..=12.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let dim = days_in_months(year);
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    sum + day
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instant {
    local: DateTime<FixedOffset>,
}

impl Instant {
    pub fn new(local: DateTime<FixedOffset>) -> Self {
        Self { local }
    }

    /// Captures a zoned date-time, keeping its wall-clock fields and the
    /// offset in effect at that moment.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self::new(dt.fixed_offset())
    }

    /// Builds an instant from civil fields and an offset in hours east of UTC.
    pub fn from_local(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        utc_offset_hours: f64,
    ) -> Result<Self> {
        if !utc_offset_hours.is_finite() {
            return Err(Error::InvalidDateTime(format!(
                "utc offset {utc_offset_hours} h is not finite"
            )));
        }
        let offset_secs = (utc_offset_hours * 3600.0).round() as i32;
        let offset = FixedOffset::east_opt(offset_secs).ok_or_else(|| {
            Error::InvalidDateTime(format!("utc offset {utc_offset_hours} h out of range"))
        })?;
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .ok_or_else(|| {
                Error::InvalidDateTime(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02} is not a calendar date-time"
                ))
            })?;
        let local = offset
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| Error::InvalidDateTime(format!("{naive} has no single instant")))?;
        Ok(Self::new(local))
    }

    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn local(&self) -> &DateTime<FixedOffset> {
        &self.local
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.local.with_timezone(&Utc)
    }

    pub fn year(&self) -> i32 {
        self.local.year()
    }

    pub fn month(&self) -> u32 {
        self.local.month()
    }

    pub fn day(&self) -> u32 {
        self.local.day()
    }

    pub fn hour(&self) -> u32 {
        self.local.hour()
    }

    pub fn minute(&self) -> u32 {
        self.local.minute()
    }

    /// Whole seconds of the minute; a leap second reads as 59.
    pub fn second(&self) -> u32 {
        self.local.second()
    }

    pub fn is_leap_year(&self) -> bool {
        leap_year(self.year())
    }

    pub fn days_in_year(&self) -> u32 {
        days_in_year(self.year())
    }

    pub fn day_of_year(&self) -> u32 {
        day_of_year(self.year(), self.month(), self.day())
    }

    /// Seconds elapsed since local midnight, including the sub-second part.
    pub fn seconds_since_midnight(&self) -> f64 {
        self.millis_since_midnight() as f64 / 1000.0
    }

    /// Milliseconds since local midnight, always below [`MILLIS_PER_DAY`].
    pub fn millis_since_midnight(&self) -> u32 {
        let secs = self.local.num_seconds_from_midnight();
        // chrono stores a leap second as nanos >= 1e9
        let millis = self.local.nanosecond().min(999_999_999) / 1_000_000;
        (secs * 1000 + millis).min(MILLIS_PER_DAY - 1)
    }

    /// Offset from UTC in hours, positive east of Greenwich.
    pub fn utc_offset_hours(&self) -> f64 {
        self.local.offset().local_minus_utc() as f64 / 3600.0
    }

    /// UTC time of day in fractional hours.
    pub fn utc_hours_of_day(&self) -> f64 {
        let utc = self.utc();
        let nanos = utc.nanosecond().min(999_999_999) as f64 / 1e9;
        (utc.num_seconds_from_midnight() as f64 + nanos) / 3600.0
    }
}

impl From<DateTime<FixedOffset>> for Instant {
    fn from(local: DateTime<FixedOffset>) -> Self {
        Self::new(local)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(utc: DateTime<Utc>) -> Self {
        Self::from_datetime(&utc)
    }
}
