//! Preference-driven venue ranking.
//!
//! The engine scores every venue additively against a [`UserPreferences`]
//! query, with an optional profile contributing cuisine dislikes. A request
//! for a specific venue by name bypasses scoring entirely. Magnitudes come
//! from [`RankingWeights`] so they can be tuned without code changes.
//!
//! [`UserPreferences`]: concierge_core::UserPreferences
//! [`RankingWeights`]: concierge_core::RankingWeights

pub mod engine;
pub mod matching;
pub mod reasons;

pub use engine::{rank, RankedVenue, Ranker, Ranking};
pub use matching::{area_matches, mutual_contains, name_matches};
pub use reasons::match_reason;
