use interpreter_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("a pipeline run is already in flight for this session")]
    Busy,

    #[error("Internal error: {0}")]
    Internal(String),
}
