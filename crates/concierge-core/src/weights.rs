use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tunable magnitudes used by the ranking engine.
///
/// Every field defaults to the value the engine was tuned with, so a
/// weights file only needs to list the entries it overrides. Penalties are
/// stored as positive magnitudes and subtracted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
    pub dislike_penalty: i64,
    pub area_match_boost: i64,
    pub area_mismatch_penalty: i64,
    /// Latest opening time, in minutes after midnight, that still counts
    /// as serving lunch.
    pub lunch_cutoff_minutes: u32,
    pub lunch_reward: i64,
    pub lunch_penalty: i64,
    pub romantic_threshold: u8,
    pub romantic_flat_boost: i64,
    pub romantic_per_point: i64,
    pub party_threshold: u8,
    pub party_flat_boost: i64,
    pub party_per_point: i64,
    pub instagram_per_point: i64,
    pub cuisine_boost: i64,
    pub budget_reward: i64,
    pub budget_penalty: i64,
    pub rating_multiplier: i64,
    /// Maximum number of structured labels joined into one match reason.
    pub max_reasons: usize,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            dislike_penalty: 500_000,
            area_match_boost: 100_000,
            area_mismatch_penalty: 50_000,
            lunch_cutoff_minutes: 870,
            lunch_reward: 5_000,
            lunch_penalty: 10_000,
            romantic_threshold: 8,
            romantic_flat_boost: 8_000,
            romantic_per_point: 100,
            party_threshold: 4,
            party_flat_boost: 8_000,
            party_per_point: 500,
            instagram_per_point: 500,
            cuisine_boost: 2_000,
            budget_reward: 500,
            budget_penalty: 200,
            rating_multiplier: 20,
            max_reasons: 2,
        }
    }
}

impl RankingWeights {
    /// Checks that magnitudes are non-negative and bounded fields are in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let magnitudes = [
            ("dislike_penalty", self.dislike_penalty),
            ("area_match_boost", self.area_match_boost),
            ("area_mismatch_penalty", self.area_mismatch_penalty),
            ("lunch_reward", self.lunch_reward),
            ("lunch_penalty", self.lunch_penalty),
            ("romantic_flat_boost", self.romantic_flat_boost),
            ("romantic_per_point", self.romantic_per_point),
            ("party_flat_boost", self.party_flat_boost),
            ("party_per_point", self.party_per_point),
            ("instagram_per_point", self.instagram_per_point),
            ("cuisine_boost", self.cuisine_boost),
            ("budget_reward", self.budget_reward),
            ("budget_penalty", self.budget_penalty),
            ("rating_multiplier", self.rating_multiplier),
        ];
        if let Some((name, value)) = magnitudes.iter().find(|(_, v)| *v < 0) {
            return Err(ConfigError::Validation(format!(
                "{name} must be non-negative, got {value}"
            )));
        }

        if self.lunch_cutoff_minutes >= 1440 {
            return Err(ConfigError::Validation(format!(
                "lunch_cutoff_minutes must be below 1440, got {}",
                self.lunch_cutoff_minutes
            )));
        }

        if self.max_reasons == 0 {
            return Err(ConfigError::Validation(
                "max_reasons must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RankingWeights::default().validate().is_ok());
    }

    #[test]
    fn mismatch_penalty_defaults_to_half_the_boost() {
        let w = RankingWeights::default();
        assert_eq!(w.area_mismatch_penalty * 2, w.area_match_boost);
    }

    #[test]
    fn rejects_negative_magnitude() {
        let w = RankingWeights {
            cuisine_boost: -1,
            ..RankingWeights::default()
        };
        let err = w.validate().unwrap_err();
        assert!(err.to_string().contains("cuisine_boost"));
    }

    #[test]
    fn rejects_cutoff_past_midnight() {
        let w = RankingWeights {
            lunch_cutoff_minutes: 1440,
            ..RankingWeights::default()
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn rejects_zero_max_reasons() {
        let w = RankingWeights {
            max_reasons: 0,
            ..RankingWeights::default()
        };
        assert!(w.validate().unwrap_err().to_string().contains("max_reasons"));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let w: RankingWeights = serde_yaml::from_str("area_match_boost: 250000\n").unwrap();
        assert_eq!(w.area_match_boost, 250_000);
        assert_eq!(w.dislike_penalty, 500_000);
        assert_eq!(w.max_reasons, 2);
    }
}
