use thiserror::Error;
use uuid::Uuid;

/// Store boundary errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Malformed event row {id}: {reason}")]
    MalformedRow { id: Uuid, reason: String },

    #[error("Event not found: {0}")]
    EventNotFound(Uuid),

    #[error(transparent)]
    CoreError(#[from] shindig_core::error::CoreError),

    #[error(transparent)]
    EngineError(#[from] shindig_engine::error::EngineError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
