use serde::{Deserialize, Serialize};

use crate::{MenuItem, Venue};

/// The subset of a persisted user profile this workspace consumes.
///
/// Only `dislikes` influences ranking. The saved/binned lists drive
/// presentation-side filtering such as swipe decks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Cuisine aversions, matched as case-insensitive substrings.
    pub dislikes: Vec<String>,
    pub favourite_areas: Vec<String>,
    pub saved_venues: Vec<String>,
    pub binned_venues: Vec<String>,
    pub saved_dishes: Vec<String>,
    pub binned_dishes: Vec<String>,
}

impl UserProfile {
    /// Returns `true` if any dislike is contained in `cuisine`, ignoring case.
    #[must_use]
    pub fn dislikes_cuisine(&self, cuisine: &str) -> bool {
        let cuisine = cuisine.to_lowercase();
        self.dislikes
            .iter()
            .any(|d| cuisine.contains(&d.to_lowercase()))
    }

    /// Venues neither saved nor binned, in input order.
    #[must_use]
    pub fn unseen_venues<'a>(&self, venues: &'a [Venue]) -> Vec<&'a Venue> {
        venues
            .iter()
            .filter(|v| !self.saved_venues.contains(&v.id) && !self.binned_venues.contains(&v.id))
            .collect()
    }

    /// Dishes neither saved nor binned, in input order.
    #[must_use]
    pub fn unseen_dishes<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        items
            .iter()
            .filter(|m| !self.saved_dishes.contains(&m.id) && !self.binned_dishes.contains(&m.id))
            .collect()
    }

    /// Adds `venue_id` to the saved list, or removes it if already present.
    /// Returns whether the venue is saved afterwards.
    pub fn toggle_saved_venue(&mut self, venue_id: &str) -> bool {
        if let Some(pos) = self.saved_venues.iter().position(|id| id == venue_id) {
            self.saved_venues.remove(pos);
            false
        } else {
            self.saved_venues.push(venue_id.to_string());
            true
        }
    }
}
