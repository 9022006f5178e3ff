//! Booking-time commands: slots, two-hour windows and open status.

use concierge_core::{AppConfig, Venue};
use concierge_schedule::{
    bookable_slots, generate_time_slots, generate_two_hour_windows, venue_status, Clock,
    SystemClock, VenueStatus,
};

use crate::catalog::truncate;
use crate::{find_venue, print_json};

pub(crate) fn run_slots(
    config: &AppConfig,
    venues: &[Venue],
    key: &str,
    all: bool,
    json: bool,
) -> anyhow::Result<()> {
    let venue = find_venue(venues, key)?;
    let slots = if all {
        generate_time_slots(&venue.opening_hours)
    } else {
        let clock = SystemClock::with_offset_hours(config.utc_offset_hours)?;
        bookable_slots(&venue.opening_hours, clock.minutes_of_day())
    };

    if json {
        return print_json(&serde_json::to_value(&slots)?);
    }

    if slots.is_empty() {
        println!("no time slots available at {}", venue.name);
        return Ok(());
    }
    println!("{} ({})", venue.name, venue.opening_hours);
    for slot in slots {
        println!("  {slot}");
    }
    Ok(())
}

pub(crate) fn run_windows(venues: &[Venue], key: &str, json: bool) -> anyhow::Result<()> {
    let venue = find_venue(venues, key)?;
    let windows = generate_two_hour_windows(&venue.opening_hours);

    if json {
        return print_json(&serde_json::to_value(&windows)?);
    }

    if windows.is_empty() {
        println!("no two-hour windows available at {}", venue.name);
        return Ok(());
    }
    println!("{} ({})", venue.name, venue.opening_hours);
    for window in windows {
        println!("  {}", window.label);
    }
    Ok(())
}

pub(crate) fn run_status(config: &AppConfig, venues: &[Venue], json: bool) -> anyhow::Result<()> {
    let clock = SystemClock::with_offset_hours(config.utc_offset_hours)?;

    if json {
        let entries: Vec<serde_json::Value> = venues
            .iter()
            .map(|v| {
                serde_json::json!({
                    "id": v.id,
                    "name": v.name,
                    "status": venue_status(&v.opening_hours, &v.availability, &clock),
                })
            })
            .collect();
        return print_json(&serde_json::Value::Array(entries));
    }

    println!("{:<6}{:<28}{:<20}STATUS", "ID", "NAME", "HOURS");
    for v in venues {
        let status = venue_status(&v.opening_hours, &v.availability, &clock)
            .map_or("\u{2014}", VenueStatus::label);
        println!(
            "{:<6}{:<28}{:<20}{}",
            v.id,
            truncate(&v.name, 26),
            truncate(&v.opening_hours, 18),
            status
        );
    }
    Ok(())
}
