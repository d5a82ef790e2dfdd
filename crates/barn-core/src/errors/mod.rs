//! Error handling for the barn engine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod schedule_error;

pub use config_error::ConfigError;
pub use schedule_error::ScheduleError;

/// Top-level engine error.
#[derive(Debug, thiserror::Error)]
pub enum BarnError {
    #[error("unknown event category: {name}")]
    UnknownCategory { name: String },

    #[error("schedule error: {0}")]
    ScheduleError(#[from] ScheduleError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

pub type BarnResult<T> = Result<T, BarnError>;
