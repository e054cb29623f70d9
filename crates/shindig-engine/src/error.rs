use thiserror::Error;

/// Date-resolution errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid listing window: {days} days")]
    InvalidRange { days: i64 },

    #[error("Invalid recurrence: {0}")]
    InvalidRecurrence(&'static str),

    #[error("Event is already archived")]
    IllegalArchival,
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
