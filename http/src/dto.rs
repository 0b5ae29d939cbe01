use interpreter_application::{InterpretOutcome, LanguageField};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use base64::{engine::general_purpose, Engine as _};

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub input_language: String,
    pub output_language: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectLanguageRequest {
    pub field: LanguageField,
    /// ISO 639-1 code of a supported language.
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct SetCredentialRequest {
    pub credential: String,
}

#[derive(Debug, Deserialize)]
pub struct DeliverPayloadRequest {
    pub payload_base64: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase", tag = "source")]
pub enum InterpretRequest {
    Microphone,
    Browser,
    File { file_base64: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum InterpretResponse {
    Done {
        transcript: String,
        translation: String,
        audio_base64: String,
        media_type: String,
        message: String,
    },
    Empty {
        advisory: String,
    },
}

impl From<InterpretOutcome> for InterpretResponse {
    fn from(outcome: InterpretOutcome) -> Self {
        match outcome {
            InterpretOutcome::Done {
                transcript,
                translation,
                audio,
            } => InterpretResponse::Done {
                transcript,
                translation,
                audio_base64: general_purpose::STANDARD.encode(&audio.bytes),
                media_type: audio.media_type,
                message: "Interpretation complete.".to_string(),
            },
            InterpretOutcome::Empty { advisory } => InterpretResponse::Empty { advisory },
        }
    }
}
