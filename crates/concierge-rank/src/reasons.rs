//! Short human-readable labels explaining why a venue was suggested.

use concierge_core::{RankingWeights, UserPreferences, Venue};

pub const REQUESTED_VENUE: &str = "Requested Venue";
pub const ULTRA_ROMANTIC: &str = "Ultra-Romantic";
pub const HIGH_ENERGY: &str = "High Energy";
pub const SEPARATOR: &str = " • ";

/// Builds the match reason for a scored venue.
///
/// Structured labels are collected in a fixed order (area, romance, energy)
/// and at most `weights.max_reasons` of them are kept. With no label the
/// venue's own selling point is used instead.
#[must_use]
pub fn match_reason(venue: &Venue, prefs: &UserPreferences, weights: &RankingWeights) -> String {
    let mut labels: Vec<String> = Vec::new();

    if let Some(area) = prefs.area_query() {
        if venue
            .location
            .to_lowercase()
            .contains(&area.to_lowercase())
        {
            labels.push(format!("Match: {}", venue.location));
        }
    }
    if prefs.wants_romantic() && venue.romantic_score >= weights.romantic_threshold {
        labels.push(ULTRA_ROMANTIC.to_string());
    }
    if prefs.wants_party() && venue.party_vibe >= weights.party_threshold {
        labels.push(HIGH_ENERGY.to_string());
    }

    labels.truncate(weights.max_reasons);
    if labels.is_empty() {
        venue.usp.clone()
    } else {
        labels.join(SEPARATOR)
    }
}
