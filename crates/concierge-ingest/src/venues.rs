//! Normalization of the venue table into [`Venue`] records.

use std::collections::HashSet;

use concierge_core::{IndoorOutdoor, Venue};

use crate::error::IngestError;
use crate::media::{drive_embed_url, drive_image_url};
use crate::tabular::{data_rows, field};

// Fixed column layout of the venue table. Columns 6, 7 and 16 are unused.
const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_LOCATION_URL: usize = 2;
const COL_IMAGE: usize = 3;
const COL_MENU: usize = 4;
const COL_CONTACT: usize = 5;
const COL_TYPE: usize = 8;
const COL_LOCATION: usize = 9;
const COL_COMMISSION: usize = 10;
const COL_FAMILY: usize = 11;
const COL_CUISINE: usize = 12;
const COL_HOURS: usize = 13;
const COL_AVAILABILITY: usize = 14;
const COL_PRICE: usize = 15;
const COL_PROMO: usize = 17;
const COL_SIGNATURE: usize = 18;
const COL_HIGH_TRAFFIC: usize = 19;
const COL_LOUDNESS: usize = 20;
const COL_ROMANTIC: usize = 21;
const COL_PARTY: usize = 22;
const COL_INSTAGRAM: usize = 23;
const COL_SUNSET: usize = 24;
const COL_INDOOR_OUTDOOR: usize = 25;
const COL_BUSINESS: usize = 26;
const COL_DRESS_CODE: usize = 27;
const COL_BIRTHDAY: usize = 28;
const COL_USP: usize = 29;
const COL_EXTRA: usize = 30;

const RATING_BASE: f64 = 3.8;
const RATING_SPAN: f64 = 1.1;
const RATING_MAX: f64 = 5.0;

/// Parses the full venue table, in source row order.
///
/// Rows that fail conversion, and rows repeating an earlier id, are logged
/// with their row index and left out.
#[must_use]
pub fn parse_venues(text: &str) -> Vec<Venue> {
    let mut venues = Vec::new();
    let mut seen_ids = HashSet::new();

    for (row, fields) in data_rows(text) {
        match normalize_venue(&fields) {
            Ok(venue) => {
                if seen_ids.insert(venue.id.clone()) {
                    venues.push(venue);
                } else {
                    tracing::warn!(row, id = %venue.id, "skipping venue row with duplicate id");
                }
            }
            Err(e) => tracing::warn!(row, error = %e, "failed to parse venue row"),
        }
    }

    tracing::info!(count = venues.len(), "parsed venue table");
    venues
}

/// Rating derived from the three vibe scores, capped at 5.0 and rounded to
/// one decimal place.
#[must_use]
pub fn synthesized_rating(romantic: u8, party: u8, instagrammable: u8) -> f64 {
    let raw = f64::from(u16::from(romantic) + u16::from(party) + u16::from(instagrammable));
    let rating = ((RATING_BASE + raw / 20.0 * RATING_SPAN) * 10.0).round() / 10.0;
    rating.min(RATING_MAX)
}

fn normalize_venue(row: &[String]) -> Result<Venue, IngestError> {
    let id = field(row, COL_ID).trim();
    if id.is_empty() {
        return Err(IngestError::InvalidField {
            column: "id",
            value: String::new(),
            reason: "venue id is empty".into(),
        });
    }

    let name = field(row, COL_NAME);
    let romantic_score = parse_score("romantic_score", field(row, COL_ROMANTIC))?;
    let party_vibe = parse_score("party_vibe", field(row, COL_PARTY))?;
    let instagrammable = parse_score("instagrammable", field(row, COL_INSTAGRAM))?;

    Ok(Venue {
        id: id.to_string(),
        name: name.to_string(),
        google_location_url: field(row, COL_LOCATION_URL).to_string(),
        image_address: drive_image_url(field(row, COL_IMAGE)),
        menu_link: drive_embed_url(field(row, COL_MENU)),
        contact_number: field(row, COL_CONTACT).to_string(),
        venue_type: field(row, COL_TYPE).to_string(),
        location: field(row, COL_LOCATION).to_string(),
        commission: parse_commission(field(row, COL_COMMISSION)),
        family_friendly: is_yes(field(row, COL_FAMILY)),
        cuisine: field(row, COL_CUISINE).to_string(),
        opening_hours: field(row, COL_HOURS).to_string(),
        availability: field(row, COL_AVAILABILITY).to_string(),
        price_per_person: parse_price(field(row, COL_PRICE))?,
        promo_venue: is_promo(field(row, COL_PROMO)),
        signature_dish: strip_name_prefix(field(row, COL_SIGNATURE), name),
        high_traffic_area: is_yes(field(row, COL_HIGH_TRAFFIC)),
        loudness: parse_score("loudness", field(row, COL_LOUDNESS))?,
        romantic_score,
        party_vibe,
        instagrammable,
        sunset_view: is_yes(field(row, COL_SUNSET)),
        indoor_outdoor: IndoorOutdoor::from_cell(field(row, COL_INDOOR_OUTDOOR)),
        business_friendly: is_yes(field(row, COL_BUSINESS)),
        dress_code: strip_name_prefix(field(row, COL_DRESS_CODE), name),
        birthday_venue: is_yes(field(row, COL_BIRTHDAY)),
        usp: strip_name_prefix(field(row, COL_USP), name),
        notes: String::new(),
        extra_details: field(row, COL_EXTRA).to_string(),
        google_rating: synthesized_rating(romantic_score, party_vibe, instagrammable),
    })
}

/// Reads the leading integer of a score cell (`"7"`, `"7/10"`); blank is 0.
fn parse_score(column: &'static str, raw: &str) -> Result<u8, IngestError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(IngestError::InvalidField {
            column,
            value: raw.to_string(),
            reason: "expected a non-negative whole number".into(),
        });
    }
    digits.parse::<u8>().map_err(|e| IngestError::InvalidField {
        column,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Reads a spend cell such as `"AED 350"` by keeping only its digits.
fn parse_price(raw: &str) -> Result<u32, IngestError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse::<u32>().map_err(|e| IngestError::InvalidField {
        column: "price_per_person",
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Reads a commission cell such as `"12.5%"`: digits and dots are kept and
/// the leading number among them is used, so `"1.2.3"` reads as 1.2.
/// Cells without a number are 0.
fn parse_commission(raw: &str) -> f64 {
    let mut seen_dot = false;
    let leading: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .take_while(|&c| {
            if c == '.' {
                if seen_dot {
                    return false;
                }
                seen_dot = true;
            }
            true
        })
        .collect();
    leading.parse::<f64>().unwrap_or(0.0)
}

fn is_yes(raw: &str) -> bool {
    raw.to_lowercase().contains("yes")
}

fn is_promo(raw: &str) -> bool {
    !raw.is_empty() && !raw.to_lowercase().contains("no")
}

/// Removes a leading `"<venue name>,"` that the source repeats in some
/// descriptive cells, then strips stray quotes at either end.
fn strip_name_prefix(text: &str, venue_name: &str) -> String {
    let strip_quotes = |s: &str| s.trim_start_matches('"').trim_end_matches('"').to_string();

    if let Some(rest) = text.strip_prefix(&format!("{venue_name},")) {
        return strip_quotes(rest.trim());
    }
    if let Some((head, rest)) = text.split_once(',') {
        if head.trim().to_lowercase() == venue_name.trim().to_lowercase() {
            return strip_quotes(rest.trim());
        }
    }
    strip_quotes(text)
}

#[cfg(test)]
#[path = "venues_test.rs"]
mod tests;
