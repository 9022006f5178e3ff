//! The structured query object built by the dialogue collaborator.
//!
//! Every field is optional and absence always means "no constraint". The
//! wire shape is camelCase JSON; [`UserPreferences::from_json`] is the only
//! place untyped input is validated.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Date,
    Birthday,
    Business,
    Family,
    Party,
    Casual,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loudness {
    Quiet,
    Lively,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatingPreference {
    Indoor,
    Outdoor,
    Any,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VibePreferences {
    pub romantic: Option<bool>,
    pub party: Option<bool>,
    pub instagrammable: Option<bool>,
    pub loudness: Option<Loudness>,
}

impl VibePreferences {
    fn merge(self, newer: Self) -> Self {
        Self {
            romantic: newer.romantic.or(self.romantic),
            party: newer.party.or(self.party),
            instagrammable: newer.instagrammable.or(self.instagrammable),
            loudness: newer.loudness.or(self.loudness),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    pub venue_name: Option<String>,
    pub area: Option<String>,
    /// Per-person spend ceiling in AED. Fractional amounts are floored;
    /// prices are whole AED, so the ceiling admits the same venues.
    #[serde(deserialize_with = "whole_aed")]
    pub budget: Option<u32>,
    pub meal_type: Option<MealType>,
    pub cuisine: Vec<String>,
    pub occasion: Option<Occasion>,
    pub vibe: Option<VibePreferences>,
    pub indoor_outdoor: Option<SeatingPreference>,
    pub sunset: Option<bool>,
    pub looking_for_promo: Option<bool>,
    pub party_size: Option<u32>,
    pub when: Option<String>,
}

impl UserPreferences {
    /// Builds preferences from an untyped JSON object.
    ///
    /// Unknown top-level keys are ignored so newer collaborators can add
    /// fields freely; malformed values (e.g. an unknown `mealType`) are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPreferences`] if a field has the wrong
    /// shape or an unrecognised enum value.
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Overlays `newer` on `self`: every field `newer` sets wins, every field
    /// it leaves unset keeps the older value.
    #[must_use]
    pub fn merge(self, newer: Self) -> Self {
        let vibe = match (self.vibe, newer.vibe) {
            (Some(old), Some(new)) => Some(old.merge(new)),
            (old, new) => new.or(old),
        };
        Self {
            venue_name: newer.venue_name.or(self.venue_name),
            area: newer.area.or(self.area),
            budget: newer.budget.or(self.budget),
            meal_type: newer.meal_type.or(self.meal_type),
            cuisine: if newer.cuisine.is_empty() {
                self.cuisine
            } else {
                newer.cuisine
            },
            occasion: newer.occasion.or(self.occasion),
            vibe,
            indoor_outdoor: newer.indoor_outdoor.or(self.indoor_outdoor),
            sunset: newer.sunset.or(self.sunset),
            looking_for_promo: newer.looking_for_promo.or(self.looking_for_promo),
            party_size: newer.party_size.or(self.party_size),
            when: newer.when.or(self.when),
        }
    }

    /// Requested venue name, trimmed; blank counts as absent.
    #[must_use]
    pub fn venue_name_query(&self) -> Option<&str> {
        non_blank(self.venue_name.as_deref())
    }

    /// Requested area, trimmed; blank counts as absent.
    #[must_use]
    pub fn area_query(&self) -> Option<&str> {
        non_blank(self.area.as_deref())
    }

    /// Budget ceiling; zero counts as absent.
    #[must_use]
    pub fn budget_ceiling(&self) -> Option<u32> {
        self.budget.filter(|&b| b > 0)
    }

    #[must_use]
    pub fn wants_romantic(&self) -> bool {
        self.vibe.as_ref().and_then(|v| v.romantic) == Some(true)
    }

    #[must_use]
    pub fn wants_party(&self) -> bool {
        self.vibe.as_ref().and_then(|v| v.party) == Some(true)
    }

    #[must_use]
    pub fn wants_instagrammable(&self) -> bool {
        self.vibe.as_ref().and_then(|v| v.instagrammable) == Some(true)
    }
}

/// Accepts any non-negative JSON number for an AED amount.
fn whole_aed<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(amount) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if !amount.is_finite() || amount < 0.0 {
        return Err(de::Error::custom(format!(
            "expected a non-negative amount, got {amount}"
        )));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = amount.floor() as u32;
    Ok(Some(whole))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;
