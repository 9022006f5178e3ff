//! Bookable time slots and staff availability windows.
//!
//! Both generators only show times between noon and 02:00 the next day,
//! clipped to the venue's own hours when those can be read.

use serde::Serialize;

use crate::hours::{parse_opening_hours, OpenInterval, OpeningHours};
use crate::time::{format_minutes_12h, format_minutes_24h, time_to_minutes, MINUTES_PER_DAY};

/// Earliest visible time: 12:00.
const VISIBLE_START: u32 = 720;
/// Latest visible time: 02:00 the next day.
const VISIBLE_END: u32 = MINUTES_PER_DAY + 120;

const SLOT_STEP: u32 = 30;
const WINDOW_LENGTH: u32 = 120;

/// Minimum lead time before a same-day slot can still be booked.
const BOOKING_LEAD_MINUTES: u32 = 15;

/// Shown when the hours text does not split into a start and an end.
const UNSPLITTABLE_FALLBACK: &[&str] = &["7:00 PM", "7:30 PM", "8:00 PM", "8:30 PM", "9:00 PM"];
/// Shown when the hours split but a half is not a readable time.
const UNPARSEABLE_FALLBACK: &[&str] = &["7:00 PM", "8:00 PM", "9:00 PM"];

/// A two-hour availability window, e.g. `12:00 - 14:00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeBlock {
    pub start: String,
    pub end: String,
    pub label: String,
}

impl TimeBlock {
    fn from_minutes(start: u32, end: u32) -> Self {
        let start = format_minutes_24h(start);
        let end = format_minutes_24h(end);
        let label = format!("{start} - {end}");
        Self { start, end, label }
    }
}

/// Parts of the visible range during which the venue is open, in order.
///
/// An interval that starts after midnight (e.g. `01:00-05:00`) is also
/// compared against the next-day tail of the visible range. Touching
/// segments are merged.
fn visible_segments(interval: OpenInterval) -> Vec<(u32, u32)> {
    let mut segments: Vec<(u32, u32)> = Vec::new();
    for shift in [0, MINUTES_PER_DAY] {
        let lo = (interval.start + shift).max(VISIBLE_START);
        let hi = (interval.end + shift).min(VISIBLE_END);
        if lo > hi {
            continue;
        }
        match segments.last_mut() {
            Some(prev) if lo <= prev.1 => prev.1 = prev.1.max(hi),
            _ => segments.push((lo, hi)),
        }
    }
    segments
}

fn segments_for(opening_hours: &str) -> Result<Vec<(u32, u32)>, &'static [&'static str]> {
    match parse_opening_hours(opening_hours) {
        OpeningHours::Unspecified | OpeningHours::AlwaysOpen => {
            Ok(vec![(VISIBLE_START, VISIBLE_END)])
        }
        OpeningHours::Interval(interval) => Ok(visible_segments(interval)),
        OpeningHours::Unsplittable => Err(UNSPLITTABLE_FALLBACK),
        OpeningHours::Unparseable => Err(UNPARSEABLE_FALLBACK),
    }
}

/// Half-hourly booking slots as 12-hour text, e.g. `"7:30 PM"`.
///
/// Slots run from the first visible opening minute up to and including the
/// last. Unreadable hours fall back to a short fixed list of evening slots
/// rather than an empty list.
#[must_use]
pub fn generate_time_slots(opening_hours: &str) -> Vec<String> {
    let segments = match segments_for(opening_hours) {
        Ok(segments) => segments,
        Err(fallback) => return fallback.iter().map(|s| (*s).to_string()).collect(),
    };

    let mut slots = Vec::new();
    for (lo, hi) in segments {
        slots.extend(
            (lo..=hi)
                .step_by(SLOT_STEP as usize)
                .map(format_minutes_12h),
        );
    }
    slots
}

/// Consecutive two-hour windows that fit entirely inside the open hours.
///
/// A trailing partial window is dropped. Unlike [`generate_time_slots`],
/// unreadable hours yield no windows at all.
#[must_use]
pub fn generate_two_hour_windows(opening_hours: &str) -> Vec<TimeBlock> {
    let Ok(segments) = segments_for(opening_hours) else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    for (lo, hi) in segments {
        let mut m = lo;
        while m + WINDOW_LENGTH <= hi {
            blocks.push(TimeBlock::from_minutes(m, m + WINDOW_LENGTH));
            m += WINDOW_LENGTH;
        }
    }
    blocks
}

/// Slots still bookable today: those more than 15 minutes after
/// `now_minutes`.
///
/// Slot text is re-read as a clock time, so slots after midnight compare as
/// early-morning times.
#[must_use]
pub fn bookable_slots(opening_hours: &str, now_minutes: u32) -> Vec<String> {
    generate_time_slots(opening_hours)
        .into_iter()
        .filter(|slot| time_to_minutes(slot).is_ok_and(|m| m > now_minutes + BOOKING_LEAD_MINUTES))
        .collect()
}

#[cfg(test)]
#[path = "slots_test.rs"]
mod tests;
