use crate::time::{time_to_minutes, MINUTES_PER_DAY};

/// Free-text markers meaning a venue never closes.
pub(crate) const ALWAYS_OPEN_MARKERS: &[&str] =
    &["24 hours", "all opening hours", "open now", "always open"];

/// A daily open interval in minutes after midnight.
///
/// `end` is always greater than `start`; an interval that crosses midnight
/// has `end > 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenInterval {
    pub start: u32,
    pub end: u32,
}

impl OpenInterval {
    /// Builds an interval, wrapping `end` into the next day when it does not
    /// come after `start`.
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        let end = if end <= start {
            end + MINUTES_PER_DAY
        } else {
            end
        };
        Self { start, end }
    }

    /// Whether the clock minute `minute` (in `[0, 1439]`) falls in the
    /// interval, counting the early-morning tail of an overnight interval.
    #[must_use]
    pub fn contains(&self, minute: u32) -> bool {
        let within = |m: u32| m >= self.start && m < self.end;
        within(minute) || within(minute + MINUTES_PER_DAY)
    }

    #[must_use]
    pub fn crosses_midnight(&self) -> bool {
        self.end > MINUTES_PER_DAY
    }
}

/// Interpretation of an opening-hours cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningHours {
    /// The cell is blank.
    Unspecified,
    /// The cell carries an always-open marker such as `"24 hours"`.
    AlwaysOpen,
    Interval(OpenInterval),
    /// The cell does not split into exactly two dash-separated parts.
    Unsplittable,
    /// The cell splits into two parts but one is not a clock time.
    Unparseable,
}

/// Parses an opening-hours cell such as `"19:00-02:00"` or
/// `"12 PM – 11:30 PM"`.
///
/// En and em dashes are treated as hyphens and all whitespace is ignored.
#[must_use]
pub fn parse_opening_hours(text: &str) -> OpeningHours {
    if text.trim().is_empty() {
        return OpeningHours::Unspecified;
    }
    let lower = text.to_lowercase();
    if ALWAYS_OPEN_MARKERS.iter().any(|m| lower.contains(m)) {
        return OpeningHours::AlwaysOpen;
    }

    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if matches!(c, '–' | '—') { '-' } else { c })
        .collect();
    let parts: Vec<&str> = cleaned.split('-').collect();
    let [start, end] = parts.as_slice() else {
        return OpeningHours::Unsplittable;
    };

    match (time_to_minutes(start), time_to_minutes(end)) {
        (Ok(s), Ok(e)) => OpeningHours::Interval(OpenInterval::new(s, e)),
        (Err(err), _) | (_, Err(err)) => {
            tracing::debug!(hours = %text, error = %err, "unparseable opening hours");
            OpeningHours::Unparseable
        }
    }
}

/// Opening minute of an hours cell, used by meal-time heuristics.
///
/// Blank and always-open cells both read as midnight. Returns `None` when a
/// non-blank start time cannot be read.
#[must_use]
pub fn opening_minute(text: &str) -> Option<u32> {
    match parse_opening_hours(text) {
        OpeningHours::Interval(interval) => Some(interval.start),
        OpeningHours::Unspecified | OpeningHours::AlwaysOpen => Some(0),
        OpeningHours::Unsplittable | OpeningHours::Unparseable => text
            .split(['-', '–', '—'])
            .next()
            .and_then(|start| time_to_minutes(start).ok()),
    }
}
