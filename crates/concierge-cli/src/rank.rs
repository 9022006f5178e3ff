//! The `rank` command: build preferences from flags and files, then print
//! the top suggestions with their match reasons.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use concierge_core::{
    load_weights, AppConfig, MealType, RankingWeights, UserPreferences, UserProfile, Venue,
    VibePreferences,
};
use concierge_rank::Ranker;

use crate::catalog::{load_profile, truncate};
use crate::print_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MealArg {
    Breakfast,
    Lunch,
    Dinner,
    Any,
}

impl From<MealArg> for MealType {
    fn from(arg: MealArg) -> Self {
        match arg {
            MealArg::Breakfast => MealType::Breakfast,
            MealArg::Lunch => MealType::Lunch,
            MealArg::Dinner => MealType::Dinner,
            MealArg::Any => MealType::Any,
        }
    }
}

#[derive(Debug, Args)]
pub struct RankArgs {
    /// Ask for a venue by name; matching venues are returned unscored
    #[arg(long)]
    pub venue_name: Option<String>,
    /// Preferred area, e.g. "DIFC"
    #[arg(long)]
    pub area: Option<String>,
    /// Per-person budget in AED
    #[arg(long)]
    pub budget: Option<u32>,
    /// Preferred cuisine; repeat for several
    #[arg(long)]
    pub cuisine: Vec<String>,
    #[arg(long, value_enum)]
    pub meal_type: Option<MealArg>,
    #[arg(long)]
    pub romantic: bool,
    #[arg(long)]
    pub party: bool,
    #[arg(long)]
    pub instagrammable: bool,
    /// Preferences JSON file; flags given on the command line override it
    #[arg(long)]
    pub prefs: Option<PathBuf>,
    /// Profile JSON file supplying cuisine dislikes
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Disliked cuisine; repeat for several (added to the profile's list)
    #[arg(long)]
    pub dislike: Vec<String>,
    /// Number of suggestions to show (defaults to the configured limit)
    #[arg(long)]
    pub limit: Option<usize>,
}

impl RankArgs {
    /// Preferences expressed by command-line flags alone.
    pub(crate) fn flag_preferences(&self) -> UserPreferences {
        let vibe = (self.romantic || self.party || self.instagrammable).then(|| VibePreferences {
            romantic: self.romantic.then_some(true),
            party: self.party.then_some(true),
            instagrammable: self.instagrammable.then_some(true),
            loudness: None,
        });
        UserPreferences {
            venue_name: self.venue_name.clone(),
            area: self.area.clone(),
            budget: self.budget,
            meal_type: self.meal_type.map(MealType::from),
            cuisine: self.cuisine.clone(),
            vibe,
            ..UserPreferences::default()
        }
    }

    /// The profile file, if any, with command-line dislikes appended.
    pub(crate) fn profile(&self) -> anyhow::Result<Option<UserProfile>> {
        let mut profile = self.profile.as_deref().map(load_profile).transpose()?;
        if !self.dislike.is_empty() {
            profile
                .get_or_insert_with(UserProfile::default)
                .dislikes
                .extend(self.dislike.iter().cloned());
        }
        Ok(profile)
    }
}

pub(crate) fn run_rank(
    config: &AppConfig,
    venues: &[Venue],
    args: &RankArgs,
    json: bool,
) -> anyhow::Result<()> {
    let weights = match &config.weights_path {
        Some(path) => load_weights(path)
            .with_context(|| format!("failed to load ranking weights {}", path.display()))?,
        None => RankingWeights::default(),
    };

    let prefs = match &args.prefs {
        Some(path) => load_preferences(path)?.merge(args.flag_preferences()),
        None => args.flag_preferences(),
    };
    let profile = args.profile()?;

    let ranking = Ranker::new(weights).rank(venues, &prefs, profile.as_ref());
    let limit = args.limit.unwrap_or(config.suggestion_limit);
    let top = ranking.top(limit);
    tracing::info!(
        candidates = venues.len(),
        ranked = ranking.len(),
        shown = top.len(),
        "ranked venues"
    );

    if json {
        let entries: Vec<serde_json::Value> = top
            .iter()
            .map(|r| {
                serde_json::json!({
                    "venue": r.venue,
                    "score": r.score,
                    "reason": ranking.reason(&r.venue.id),
                })
            })
            .collect();
        return print_json(&serde_json::Value::Array(entries));
    }

    if top.is_empty() {
        println!("no venues to rank");
        return Ok(());
    }

    println!("{:<4}{:<28}{:<20}{:>10}  REASON", "#", "NAME", "LOCATION", "SCORE");
    for (pos, r) in top.iter().enumerate() {
        let score = r.score.map_or_else(|| "-".to_string(), |s| s.to_string());
        println!(
            "{:<4}{:<28}{:<20}{:>10}  {}",
            pos + 1,
            truncate(&r.venue.name, 26),
            truncate(&r.venue.location, 18),
            score,
            ranking.reason(&r.venue.id).unwrap_or_default()
        );
    }
    Ok(())
}

fn load_preferences(path: &Path) -> anyhow::Result<UserPreferences> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read preferences {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;
    Ok(UserPreferences::from_json(value)?)
}
