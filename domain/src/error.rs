use thiserror::Error;

use crate::PipelineStep;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("unsupported language `{0}`")]
    InvalidLanguage(String),

    #[error("no credential set for this session")]
    MissingCredential,

    #[error("capture failed: {0}")]
    Capture(String),

    #[error("{step} service error: {message}")]
    Service { step: PipelineStep, message: String },

    #[error("{step} service request timed out")]
    ServiceTimeout { step: PipelineStep },

    #[error("{step} service rejected the credential: {message}")]
    Unauthorized { step: PipelineStep, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn capture(message: impl Into<String>) -> Self {
        DomainError::Capture(message.into())
    }

    pub fn service(step: PipelineStep, message: impl Into<String>) -> Self {
        DomainError::Service {
            step,
            message: message.into(),
        }
    }

    pub fn timeout(step: PipelineStep) -> Self {
        DomainError::ServiceTimeout { step }
    }

    pub fn unauthorized(step: PipelineStep, message: impl Into<String>) -> Self {
        DomainError::Unauthorized {
            step,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal(message.into())
    }
}
