use std::path::{Path, PathBuf};

use crate::app_config::{AppConfig, DEFAULT_UTC_OFFSET_HOURS};
use crate::{ConfigError, RankingWeights};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let venues_path = PathBuf::from(or_default("CONCIERGE_VENUES_PATH", "./data/venues.csv"));
    let menu_path = PathBuf::from(or_default("CONCIERGE_MENU_PATH", "./data/menu.csv"));
    let weights_path = lookup("CONCIERGE_WEIGHTS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let log_level = or_default("CONCIERGE_LOG_LEVEL", "info");

    let suggestion_limit = or_default("CONCIERGE_SUGGESTION_LIMIT", "5")
        .parse::<usize>()
        .map_err(|e| invalid("CONCIERGE_SUGGESTION_LIMIT", e.to_string()))?;

    let utc_offset_hours = or_default(
        "CONCIERGE_UTC_OFFSET_HOURS",
        &DEFAULT_UTC_OFFSET_HOURS.to_string(),
    )
    .parse::<i32>()
    .map_err(|e| invalid("CONCIERGE_UTC_OFFSET_HOURS", e.to_string()))?;
    if !(-12..=14).contains(&utc_offset_hours) {
        return Err(invalid(
            "CONCIERGE_UTC_OFFSET_HOURS",
            format!("{utc_offset_hours} is outside -12..=14"),
        ));
    }

    Ok(AppConfig {
        venues_path,
        menu_path,
        weights_path,
        log_level,
        suggestion_limit,
        utc_offset_hours,
    })
}

/// Load and validate ranking weights from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_weights(path: &Path) -> Result<RankingWeights, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WeightsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let weights: RankingWeights = serde_yaml::from_str(&content)?;
    weights.validate()?;

    Ok(weights)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
