use thiserror::Error;
use uuid::Uuid;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    StoreError(#[from] shindig_store::error::StoreError),

    #[error(transparent)]
    EngineError(#[from] shindig_engine::error::EngineError),

    #[error(transparent)]
    CoreError(#[from] shindig_core::error::CoreError),

    #[error("Event not found: {0}")]
    EventNotFound(Uuid),

    #[error("Requested listing window of {requested} days exceeds the {max} day cap")]
    WindowTooLong { requested: i64, max: i64 },
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
