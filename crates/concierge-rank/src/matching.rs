//! Substring matching rules shared by the override and area steps.
//!
//! Matching is plain case-insensitive containment, checked in both
//! directions where noted. An empty side is contained in everything, so a
//! venue with a blank location matches every area query.

use concierge_core::Venue;

/// `true` if either string contains the other. Both must already be
/// lowercased.
#[must_use]
pub fn mutual_contains(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Whether `query` names `venue`, in either direction of containment.
#[must_use]
pub fn name_matches(query: &str, venue: &Venue) -> bool {
    mutual_contains(&venue.name.to_lowercase(), &query.to_lowercase())
}

/// Whether `area` refers to where `venue` is.
///
/// Location and name match in either direction; the maps URL only has to
/// contain the area.
#[must_use]
pub fn area_matches(area: &str, venue: &Venue) -> bool {
    let area = area.trim().to_lowercase();
    mutual_contains(&venue.location.trim().to_lowercase(), &area)
        || mutual_contains(&venue.name.trim().to_lowercase(), &area)
        || venue.google_location_url.to_lowercase().contains(&area)
}
