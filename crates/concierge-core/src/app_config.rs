use std::path::PathBuf;

/// Offset of the reference civil clock from UTC, in hours (Gulf Standard Time).
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub venues_path: PathBuf,
    pub menu_path: PathBuf,
    pub weights_path: Option<PathBuf>,
    pub log_level: String,
    pub suggestion_limit: usize,
    pub utc_offset_hours: i32,
}
