//! Read-only catalog listings: venues and per-venue menus.

use std::path::Path;

use anyhow::Context;
use concierge_core::{AppConfig, UserProfile, Venue};
use concierge_ingest::{menu_for_venue, parse_menu_items};

use crate::{find_venue, print_json, read_table};

/// List venues, optionally narrowed by location text and by what a profile
/// has already seen.
pub(crate) fn run_venues(
    venues: &[Venue],
    area: Option<&str>,
    profile_path: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let profile = profile_path.map(load_profile).transpose()?;

    let mut shown: Vec<&Venue> = match &profile {
        Some(profile) => profile.unseen_venues(venues),
        None => venues.iter().collect(),
    };
    if let Some(area) = area.map(str::to_lowercase) {
        shown.retain(|v| v.location.to_lowercase().contains(&area));
    }

    if json {
        return print_json(&serde_json::to_value(&shown)?);
    }

    if shown.is_empty() {
        println!("no venues found");
        return Ok(());
    }

    println!(
        "{:<6}{:<28}{:<20}{:<24}{:>8}{:>8}",
        "ID", "NAME", "LOCATION", "CUISINE", "AED", "RATING"
    );
    for v in shown {
        println!(
            "{:<6}{:<28}{:<20}{:<24}{:>8}{:>8.1}",
            v.id,
            truncate(&v.name, 26),
            truncate(&v.location, 18),
            truncate(&v.cuisine, 22),
            v.price_per_person,
            v.google_rating
        );
    }
    Ok(())
}

/// Show the dishes grouped under one venue.
pub(crate) fn run_menu(
    config: &AppConfig,
    venues: &[Venue],
    key: &str,
    tag: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let venue = find_venue(venues, key)?;
    let items = parse_menu_items(&read_table(&config.menu_path)?, venues);
    let mut dishes = menu_for_venue(&items, venue);
    if let Some(tag) = tag {
        dishes.retain(|d| d.has_tag(tag));
    }

    if json {
        return print_json(&serde_json::to_value(&dishes)?);
    }

    if dishes.is_empty() {
        println!("no menu items found for '{}'", venue.name);
        return Ok(());
    }

    println!("{}", venue.name);
    for dish in dishes {
        let tags = if dish.dietary_tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", dish.dietary_tags.join(", "))
        };
        println!(
            "  {:<14}{:<32}{:>8.2}{}",
            truncate(&dish.course, 12),
            truncate(&dish.item, 30),
            dish.price,
            tags
        );
    }
    Ok(())
}

pub(crate) fn load_profile(path: &Path) -> anyhow::Result<UserProfile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid profile {}", path.display()))
}

/// Shortens `text` to at most `max` characters for column display.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}
