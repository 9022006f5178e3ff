//! The reference clock for status and slot computations.
//!
//! Venue hours are civil times at a single fixed UTC offset, independent of
//! the host timezone. Callers inject a [`Clock`] so tests can pin "now".

use chrono::{DateTime, FixedOffset, Timelike, Utc};

use crate::error::ScheduleError;

/// Source of the current civil time at the target offset.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Minutes after local midnight, in `[0, 1439]`.
    fn minutes_of_day(&self) -> u32 {
        let now = self.now();
        now.hour() * 60 + now.minute()
    }
}

/// Wall clock converted to a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidOffset`] if `hours` is not a valid
    /// UTC offset.
    pub fn with_offset_hours(hours: i32) -> Result<Self, ScheduleError> {
        let offset = hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or(ScheduleError::InvalidOffset { hours })?;
        Ok(Self { offset })
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// A clock reading `hour:minute` on an arbitrary date at `offset_hours`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidOffset`] for an invalid offset and
    /// [`ScheduleError::InvalidTime`] for an out-of-range hour or minute.
    pub fn at(offset_hours: i32, hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        let offset = offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or(ScheduleError::InvalidOffset {
                hours: offset_hours,
            })?;
        let instant = chrono::NaiveDate::from_ymd_opt(2025, 1, 15)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .and_then(|naive| naive.and_local_timezone(offset).single())
            .ok_or_else(|| ScheduleError::InvalidTime {
                input: format!("{hour}:{minute:02}"),
                reason: "hour or minute out of range".to_string(),
            })?;
        Ok(Self(instant))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
