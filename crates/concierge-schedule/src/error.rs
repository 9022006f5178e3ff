use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid time \"{input}\": {reason}")]
    InvalidTime { input: String, reason: String },

    #[error("invalid UTC offset: {hours} hours")]
    InvalidOffset { hours: i32 },
}
