//! The venue ranking engine.
//!
//! Ranking is a pure function of its inputs. Venues are borrowed, never
//! copied or mutated; scores live alongside them in [`RankedVenue`].

use std::collections::BTreeMap;

use concierge_core::{MealType, RankingWeights, UserPreferences, UserProfile, Venue};
use concierge_schedule::opening_minute;

use crate::matching::{area_matches, name_matches};
use crate::reasons::{match_reason, REQUESTED_VENUE};

/// One entry of a [`Ranking`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedVenue<'a> {
    pub venue: &'a Venue,
    /// Additive score; `None` when the venue was returned by name override
    /// without scoring.
    pub score: Option<i64>,
}

/// Ordered suggestions plus a match reason for every returned venue id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking<'a> {
    pub venues: Vec<RankedVenue<'a>>,
    pub reasons: BTreeMap<String, String>,
}

impl<'a> Ranking<'a> {
    /// The first `n` ranked venues.
    #[must_use]
    pub fn top(&self, n: usize) -> &[RankedVenue<'a>] {
        &self.venues[..n.min(self.venues.len())]
    }

    #[must_use]
    pub fn reason(&self, venue_id: &str) -> Option<&str> {
        self.reasons.get(venue_id).map(String::as_str)
    }

    /// `true` when the result came from an exact venue-name request.
    #[must_use]
    pub fn is_override(&self) -> bool {
        !self.venues.is_empty() && self.venues.iter().all(|r| r.score.is_none())
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&'a str> {
        self.venues.iter().map(|r| r.venue.id.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

/// Scores and orders venues against user preferences.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    weights: RankingWeights,
}

impl Ranker {
    #[must_use]
    pub fn new(weights: RankingWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &RankingWeights {
        &self.weights
    }

    /// Ranks `venues` for `prefs`.
    ///
    /// A venue-name request that matches anything short-circuits scoring and
    /// returns the matches in input order. Otherwise every venue is scored,
    /// sorted by descending score (ties keep input order) and, when an area
    /// was requested, narrowed to positive scores if any exist.
    #[must_use]
    pub fn rank<'a>(
        &self,
        venues: &'a [Venue],
        prefs: &UserPreferences,
        profile: Option<&UserProfile>,
    ) -> Ranking<'a> {
        if let Some(ranking) = requested_venues(venues, prefs) {
            return ranking;
        }

        let mut ranked: Vec<RankedVenue<'a>> = venues
            .iter()
            .map(|venue| RankedVenue {
                venue,
                score: Some(self.score(venue, prefs, profile)),
            })
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        if prefs.area_query().is_some() && ranked.iter().any(|r| r.score > Some(0)) {
            let before = ranked.len();
            ranked.retain(|r| r.score > Some(0));
            tracing::debug!(
                kept = ranked.len(),
                dropped = before - ranked.len(),
                "area filter applied"
            );
        }

        let reasons = ranked
            .iter()
            .map(|r| {
                (
                    r.venue.id.clone(),
                    match_reason(r.venue, prefs, &self.weights),
                )
            })
            .collect();

        Ranking {
            venues: ranked,
            reasons,
        }
    }

    /// Additive score of one venue.
    #[must_use]
    pub fn score(
        &self,
        venue: &Venue,
        prefs: &UserPreferences,
        profile: Option<&UserProfile>,
    ) -> i64 {
        let w = &self.weights;
        let mut score = 0i64;

        if profile.is_some_and(|p| p.dislikes_cuisine(&venue.cuisine)) {
            score -= w.dislike_penalty;
        }

        if let Some(area) = prefs.area_query() {
            if area_matches(area, venue) {
                score += w.area_match_boost;
            } else {
                score -= w.area_mismatch_penalty;
            }
        }

        if prefs.meal_type == Some(MealType::Lunch) {
            match opening_minute(&venue.opening_hours) {
                Some(start) if start <= w.lunch_cutoff_minutes => score += w.lunch_reward,
                _ => score -= w.lunch_penalty,
            }
        }

        if prefs.wants_romantic() {
            score += vibe_boost(
                venue.romantic_score,
                w.romantic_threshold,
                w.romantic_flat_boost,
                w.romantic_per_point,
            );
        }
        if prefs.wants_party() {
            score += vibe_boost(
                venue.party_vibe,
                w.party_threshold,
                w.party_flat_boost,
                w.party_per_point,
            );
        }
        if prefs.wants_instagrammable() {
            score += i64::from(venue.instagrammable) * w.instagram_per_point;
        }

        if cuisine_matches(&prefs.cuisine, &venue.cuisine) {
            score += w.cuisine_boost;
        }

        if let Some(budget) = prefs.budget_ceiling() {
            if venue.price_per_person <= budget {
                score += w.budget_reward;
            } else {
                score -= w.budget_penalty;
            }
        }

        score + rating_points(venue.google_rating, w.rating_multiplier)
    }
}

/// Ranks with the default weights.
#[must_use]
pub fn rank<'a>(
    venues: &'a [Venue],
    prefs: &UserPreferences,
    profile: Option<&UserProfile>,
) -> Ranking<'a> {
    Ranker::default().rank(venues, prefs, profile)
}

fn requested_venues<'a>(venues: &'a [Venue], prefs: &UserPreferences) -> Option<Ranking<'a>> {
    let query = prefs.venue_name_query()?;
    let matches: Vec<RankedVenue<'a>> = venues
        .iter()
        .filter(|v| name_matches(query, v))
        .map(|venue| RankedVenue { venue, score: None })
        .collect();
    if matches.is_empty() {
        tracing::debug!(query, "requested venue not found, ranking all venues");
        return None;
    }

    tracing::debug!(query, count = matches.len(), "returning requested venues");
    let reasons = matches
        .iter()
        .map(|r| (r.venue.id.clone(), REQUESTED_VENUE.to_string()))
        .collect();
    Some(Ranking {
        venues: matches,
        reasons,
    })
}

fn vibe_boost(value: u8, threshold: u8, flat: i64, per_point: i64) -> i64 {
    if value >= threshold {
        flat
    } else {
        i64::from(value) * per_point
    }
}

/// Any non-blank requested cuisine contained in the venue's cuisine text.
/// Several matches still count once.
fn cuisine_matches(requested: &[String], cuisine: &str) -> bool {
    let cuisine = cuisine.to_lowercase();
    requested
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .any(|c| cuisine.contains(&c.to_lowercase()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn rating_points(rating: f64, multiplier: i64) -> i64 {
    (rating * multiplier as f64).round() as i64
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
