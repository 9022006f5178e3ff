//! Normalization of the menu table and grouping of dishes by venue.

use std::collections::HashMap;

use concierge_core::{MenuItem, Venue};

use crate::tabular::{data_rows, field};

const COL_SLUG: usize = 0;
const COL_COURSE: usize = 1;
const COL_ITEM: usize = 2;
const COL_DESCRIPTION: usize = 3;
const COL_PRICE: usize = 4;
const COL_TAGS: usize = 5;

/// Lowercases `s` and drops every character that is not an ASCII letter or
/// digit, so `"Sky Lounge"`, `"sky-lounge"` and `"SKY_LOUNGE!"` compare equal.
#[must_use]
pub fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Parses the menu table, attaching each row to the venue whose normalized
/// name equals the row's normalized slug.
///
/// Rows naming no known venue are dropped. When two venues normalize to the
/// same key the earlier one wins.
#[must_use]
pub fn parse_menu_items(text: &str, venues: &[Venue]) -> Vec<MenuItem> {
    let mut by_key: HashMap<String, &Venue> = HashMap::new();
    for venue in venues {
        by_key.entry(normalize_key(&venue.name)).or_insert(venue);
    }

    let mut items = Vec::new();
    let mut unmatched = 0usize;

    for (row, fields) in data_rows(text) {
        let slug = field(&fields, COL_SLUG);
        let Some(venue) = by_key.get(&normalize_key(slug)) else {
            tracing::debug!(row, slug, "menu row matches no venue");
            unmatched += 1;
            continue;
        };

        items.push(MenuItem {
            id: format!("m-{row}"),
            venue_slug: slug.to_string(),
            venue_name: venue.name.clone(),
            venue_image: venue.image_address.clone(),
            course: field(&fields, COL_COURSE).to_string(),
            item: field(&fields, COL_ITEM).to_string(),
            description: field(&fields, COL_DESCRIPTION).to_string(),
            price: parse_price(field(&fields, COL_PRICE)),
            dietary_tags: parse_tags(field(&fields, COL_TAGS)),
        });
    }

    tracing::info!(count = items.len(), unmatched, "parsed menu table");
    items
}

/// Dishes belonging to `venue`, using the looser rule of venue-facing views:
/// normalized slug or venue name equal to the normalized venue name, or
/// either of slug and venue name containing the other.
#[must_use]
pub fn menu_for_venue<'a>(items: &'a [MenuItem], venue: &Venue) -> Vec<&'a MenuItem> {
    let target = normalize_key(&venue.name);
    items
        .iter()
        .filter(|item| {
            let slug = normalize_key(&item.venue_slug);
            let name = normalize_key(&item.venue_name);
            slug == target
                || name == target
                || (!slug.is_empty() && (slug.contains(&target) || target.contains(&slug)))
        })
        .collect()
}

/// Leading numeric part of a price cell; anything unreadable is 0.
fn parse_price(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && c == '-')))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}

/// Splits a `;`-separated tag cell, trimming entries and dropping blanks
/// and repeats.
fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(';').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
