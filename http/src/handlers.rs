use axum::extract::{Path, State};
use axum::Json;
use base64::{engine::general_purpose, Engine as _};
use interpreter_application::{ApplicationError, CaptureRequest, LanguageField};
use interpreter_domain::{Credential, Language, LanguagePair};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::dto::{
    DeliverPayloadRequest, InterpretRequest, InterpretResponse, SelectLanguageRequest,
    SessionResponse, SetCredentialRequest,
};
use crate::error::{error_mapper, HttpError};
use crate::state::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let id = state.create_session().await;
    tracing::debug!(session_id = %id, "session created");
    Json(session_response(id, state.default_pair))
}

pub async fn select_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectLanguageRequest>,
) -> Result<Json<SessionResponse>, HttpError> {
    let language = Language::from_code(&request.language)
        .map_err(|err| error_mapper(ApplicationError::Domain(err)))?;
    let session = state.session(id).await?;
    let mut session = session.lock().await;
    session.select(request.field, language);
    tracing::debug!(
        session_id = %id,
        field = ?request.field,
        language = language.code(),
        "language selected"
    );
    Ok(Json(session_response(id, session.pair())))
}

pub async fn swap_languages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, HttpError> {
    let session = state.session(id).await?;
    let mut session = session.lock().await;
    session.swap();
    tracing::debug!(session_id = %id, "languages swapped");
    Ok(Json(session_response(id, session.pair())))
}

pub async fn set_credential(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetCredentialRequest>,
) -> Result<Json<Value>, HttpError> {
    if request.credential.trim().is_empty() {
        return Err(HttpError::Validation {
            message: "credential must not be empty".to_string(),
        });
    }
    let session = state.session(id).await?;
    session
        .lock()
        .await
        .set_credential(Credential::new(request.credential));
    tracing::debug!(session_id = %id, "credential set");
    Ok(Json(json!({ "status": "ok" })))
}

/// Browser recorders deliver their payload out of band; the next interpret
/// trigger for the `browser` source consumes it.
pub async fn deliver_payload(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DeliverPayloadRequest>,
) -> Result<Json<Value>, HttpError> {
    let session = state.session(id).await?;
    session
        .lock()
        .await
        .set_pending_payload(request.payload_base64);
    tracing::debug!(session_id = %id, "browser payload delivered");
    Ok(Json(json!({ "status": "ok" })))
}

pub async fn interpret(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<InterpretRequest>,
) -> Result<Json<InterpretResponse>, HttpError> {
    let session = state.session(id).await?;
    // A run in flight keeps the session locked; refuse instead of queueing.
    let mut session = session.try_lock().map_err(|_| HttpError::Busy)?;

    let capture = match request {
        InterpretRequest::Microphone => CaptureRequest::Microphone,
        InterpretRequest::Browser => {
            let payload = session
                .take_pending_payload()
                .ok_or_else(|| HttpError::Validation {
                    message: "no browser payload has been delivered".to_string(),
                })?;
            CaptureRequest::Browser { payload }
        }
        InterpretRequest::File { file_base64 } => {
            let bytes = general_purpose::STANDARD
                .decode(file_base64.trim())
                .map_err(|err| HttpError::Validation {
                    message: format!("uploaded file is not valid base64: {err}"),
                })?;
            CaptureRequest::File { bytes }
        }
    };

    let source = state.sources.create(capture);
    let outcome = state
        .usecase
        .interpret(&mut session, source.as_ref())
        .await
        .map_err(error_mapper)?;
    Ok(Json(InterpretResponse::from(outcome)))
}

fn session_response(id: Uuid, pair: LanguagePair) -> SessionResponse {
    SessionResponse {
        session_id: id,
        input_language: pair.input.code().to_string(),
        output_language: pair.output.code().to_string(),
    }
}
