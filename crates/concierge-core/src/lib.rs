pub mod app_config;
pub mod config;
pub mod menu;
pub mod preferences;
pub mod profile;
pub mod venue;
pub mod weights;

use thiserror::Error;

pub use app_config::{AppConfig, DEFAULT_UTC_OFFSET_HOURS};
pub use config::{load_app_config, load_app_config_from_env, load_weights};
pub use menu::MenuItem;
pub use preferences::{
    Loudness, MealType, Occasion, SeatingPreference, UserPreferences, VibePreferences,
};
pub use profile::UserProfile;
pub use venue::{IndoorOutdoor, Venue};
pub use weights::RankingWeights;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid preferences: {0}")]
    InvalidPreferences(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read weights file {path}: {source}")]
    WeightsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse weights file: {0}")]
    WeightsFileParse(#[from] serde_yaml::Error),

    #[error("weights validation failed: {0}")]
    Validation(String),
}
