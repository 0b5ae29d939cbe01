use std::time::Duration;

use async_trait::async_trait;
use interpreter_domain::{DomainError, PipelineStep, TranscriptionPort, TranscriptionRequest};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::Deserialize;

const TRANSCRIBE_PATH: &str = "/v1/audio/transcriptions";

/// REST speech-to-text client (whisper-server style): multipart WAV upload
/// plus the declared input language, plain text back.
pub struct RestTranscriptionClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl RestTranscriptionClient {
    pub fn new(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|err| DomainError::internal(format!("could not build stt client: {err}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TranscriptionPort for RestTranscriptionClient {
    async fn transcribe(&self, request: TranscriptionRequest) -> Result<String, DomainError> {
        let language = request.language.code();
        let part = Part::bytes(request.audio.bytes)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|err| DomainError::internal(format!("invalid multipart part: {err}")))?;
        let form = Form::new().part("file", part).text("language", language);

        tracing::debug!(language, "sending transcription request");
        let response = self
            .http
            .post(format!("{}{TRANSCRIBE_PATH}", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|err| map_transport_error(PipelineStep::Transcription, &err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| map_transport_error(PipelineStep::Transcription, &err))?;
        if !status.is_success() {
            return Err(error_for_status(PipelineStep::Transcription, status, &body));
        }
        parse_transcription_body(&body)
    }
}

fn parse_transcription_body(body: &str) -> Result<String, DomainError> {
    let parsed: TranscriptionResponse = serde_json::from_str(body).map_err(|err| {
        DomainError::service(
            PipelineStep::Transcription,
            format!("unparseable response body: {err}"),
        )
    })?;
    Ok(parsed.text)
}

pub(crate) fn map_transport_error(step: PipelineStep, err: &reqwest::Error) -> DomainError {
    if err.is_timeout() {
        DomainError::timeout(step)
    } else {
        DomainError::service(step, err.to_string())
    }
}

pub(crate) fn error_for_status(step: PipelineStep, status: StatusCode, body: &str) -> DomainError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            DomainError::unauthorized(step, format!("HTTP {status}"))
        }
        _ => DomainError::service(step, format!("HTTP {status}: {body}")),
    }
}
