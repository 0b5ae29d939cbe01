use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use interpreter_application::ApplicationError;
use interpreter_domain::DomainError;
use serde_json::json;

#[derive(Debug)]
pub enum HttpError {
    Validation { message: String },
    Unauthorized { message: String },
    NotFound,
    Busy,
    UpstreamFailed { message: String },
    UpstreamTimeout { message: String },
    Internal { message: String },
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Validation { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            HttpError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
            HttpError::NotFound => (StatusCode::NOT_FOUND, "Session not found".to_string()),
            HttpError::Busy => (
                StatusCode::CONFLICT,
                "A pipeline run is already in flight for this session".to_string(),
            ),
            HttpError::UpstreamFailed { message } => (StatusCode::BAD_GATEWAY, message),
            HttpError::UpstreamTimeout { message } => (StatusCode::GATEWAY_TIMEOUT, message),
            HttpError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
    }
}

pub fn error_mapper(error: ApplicationError) -> HttpError {
    match error {
        ApplicationError::Domain(domain) => match domain {
            DomainError::InvalidLanguage(_) | DomainError::Capture(_) => HttpError::Validation {
                message: domain.to_string(),
            },
            DomainError::MissingCredential | DomainError::Unauthorized { .. } => {
                HttpError::Unauthorized {
                    message: domain.to_string(),
                }
            }
            DomainError::ServiceTimeout { .. } => HttpError::UpstreamTimeout {
                message: domain.to_string(),
            },
            DomainError::Service { .. } => HttpError::UpstreamFailed {
                message: domain.to_string(),
            },
            DomainError::Internal(_) => HttpError::Internal {
                message: domain.to_string(),
            },
        },
        ApplicationError::Validation(message) => HttpError::Validation { message },
        ApplicationError::Busy => HttpError::Busy,
        ApplicationError::Internal(message) => HttpError::Internal { message },
    }
}
