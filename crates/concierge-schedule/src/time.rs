use crate::error::ScheduleError;

pub const MINUTES_PER_DAY: u32 = 1440;

/// Parses a clock time into minutes after midnight, in `[0, 1439]`.
///
/// Accepts `"19:30"`, `"7:30 PM"`, `"7 PM"`, `"7pm"`. The AM/PM marker is
/// matched case-insensitively anywhere in the text. `"12 AM"` is midnight,
/// `"12 PM"` is noon, and `"24:00"` is read as midnight.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidTime`] if the hour or minute is missing,
/// non-numeric, or out of range.
pub fn time_to_minutes(text: &str) -> Result<u32, ScheduleError> {
    let invalid = |reason: &str| ScheduleError::InvalidTime {
        input: text.to_string(),
        reason: reason.to_string(),
    };

    let lower = text.to_lowercase();
    let is_pm = lower.contains("pm");
    let is_am = lower.contains("am");
    let clock = lower.replace("am", "").replace("pm", "");
    let clock = clock.trim();
    if clock.is_empty() {
        return Err(invalid("no hour given"));
    }

    let mut parts = clock.split(':');
    let mut hours: u32 = parts
        .next()
        .map(str::trim)
        .and_then(|h| h.parse().ok())
        .ok_or_else(|| invalid("hour is not a number"))?;
    let minutes: u32 = match parts.next() {
        Some(m) => m
            .trim()
            .parse()
            .map_err(|_| invalid("minute is not a number"))?,
        None => 0,
    };

    if minutes > 59 {
        return Err(invalid("minute out of range"));
    }
    if (is_pm || is_am) && !(1..=12).contains(&hours) {
        return Err(invalid("12-hour clock hour out of range"));
    }
    if is_pm && hours < 12 {
        hours += 12;
    }
    if is_am && hours == 12 {
        hours = 0;
    }
    if hours == 24 && minutes == 0 {
        hours = 0;
    }
    if hours > 23 {
        return Err(invalid("hour out of range"));
    }

    Ok(hours * 60 + minutes)
}

/// Formats a minute offset as 12-hour text, e.g. `"7:30 PM"`.
///
/// Offsets past midnight wrap, so `1530` formats as `"1:30 AM"`.
#[must_use]
pub fn format_minutes_12h(minutes: u32) -> String {
    let of_day = minutes % MINUTES_PER_DAY;
    let h = of_day / 60;
    let m = of_day % 60;
    let meridiem = if h >= 12 { "PM" } else { "AM" };
    let h12 = match h % 12 {
        0 => 12,
        other => other,
    };
    format!("{h12}:{m:02} {meridiem}")
}

/// Formats a minute offset as zero-padded 24-hour text, e.g. `"01:30"`.
#[must_use]
pub fn format_minutes_24h(minutes: u32) -> String {
    let of_day = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", of_day / 60, of_day % 60)
}

#[cfg(test)]
#[path = "time_test.rs"]
mod tests;
