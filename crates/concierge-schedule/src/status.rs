use serde::Serialize;

use crate::clock::Clock;
use crate::hours::{parse_opening_hours, OpeningHours, ALWAYS_OPEN_MARKERS};
use crate::time::MINUTES_PER_DAY;

/// How far ahead of opening a venue counts as "opening soon".
const OPENING_SOON_WINDOW: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VenueStatus {
    #[serde(rename = "Open Now")]
    OpenNow,
    #[serde(rename = "Opening soon")]
    OpeningSoon,
    Closed,
}

impl VenueStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VenueStatus::OpenNow => "Open Now",
            VenueStatus::OpeningSoon => "Opening soon",
            VenueStatus::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for VenueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Open/closed indicator for a venue at the clock's current time.
///
/// An always-open marker in either the hours or the availability text means
/// open. Otherwise the hours must parse into a two-part range; anything else
/// yields `None` so the caller can omit the indicator.
#[must_use]
pub fn venue_status(
    opening_hours: &str,
    availability: &str,
    clock: &impl Clock,
) -> Option<VenueStatus> {
    let combined = format!("{opening_hours} {availability}").to_lowercase();
    if ALWAYS_OPEN_MARKERS.iter().any(|m| combined.contains(m)) {
        return Some(VenueStatus::OpenNow);
    }

    let OpeningHours::Interval(interval) = parse_opening_hours(opening_hours) else {
        return None;
    };

    let now = clock.minutes_of_day();
    if interval.contains(now) {
        return Some(VenueStatus::OpenNow);
    }

    let opening_start = interval.start % MINUTES_PER_DAY;
    let until_open = (opening_start + MINUTES_PER_DAY - now) % MINUTES_PER_DAY;
    if until_open > 0 && until_open <= OPENING_SOON_WINDOW {
        Some(VenueStatus::OpeningSoon)
    } else {
        Some(VenueStatus::Closed)
    }
}
