//! Clock-time arithmetic for venue opening hours.
//!
//! Everything here works in minutes after local midnight. Opening-hours
//! ranges whose end is not after their start cross midnight and are carried
//! with an end beyond 1440 so that all windowing stays monotonic.

pub mod clock;
pub mod error;
pub mod hours;
pub mod slots;
pub mod status;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ScheduleError;
pub use hours::{opening_minute, parse_opening_hours, OpenInterval, OpeningHours};
pub use slots::{bookable_slots, generate_time_slots, generate_two_hour_windows, TimeBlock};
pub use status::{venue_status, VenueStatus};
pub use time::{format_minutes_12h, format_minutes_24h, time_to_minutes, MINUTES_PER_DAY};
