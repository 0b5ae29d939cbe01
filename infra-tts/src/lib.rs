use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use interpreter_domain::{
    DomainError, PipelineStep, SynthesisPort, SynthesisRequest, SynthesizedAudio,
};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

const SYNTHESIZE_PATH: &str = "/v1/synthesize";

/// REST speech-synthesis client: translated text plus target language code
/// and speed flag in, playable audio bytes out (base64 in JSON).
pub struct RestSynthesisClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SynthesisResponse {
    audio_base64: String,
    #[serde(default = "default_media_type")]
    media_type: String,
}

fn default_media_type() -> String {
    "audio/mp3".to_string()
}

impl RestSynthesisClient {
    pub fn new(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|err| {
                DomainError::internal(format!("could not build synthesis client: {err}"))
            })?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SynthesisPort for RestSynthesisClient {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, DomainError> {
        let body = json!({
            "text": request.text,
            "language": request.language.code(),
            "slow": request.slow,
        });

        tracing::debug!(
            language = request.language.code(),
            slow = request.slow,
            text_chars = request.text.chars().count(),
            "sending synthesis request"
        );
        let response = self
            .http
            .post(format!("{}{SYNTHESIZE_PATH}", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|err| map_transport_error(&err))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|err| map_transport_error(&err))?;
        if !status.is_success() {
            return Err(DomainError::service(
                PipelineStep::Synthesis,
                format!("HTTP {status}: {payload}"),
            ));
        }
        parse_synthesis_body(&payload)
    }
}

fn parse_synthesis_body(body: &str) -> Result<SynthesizedAudio, DomainError> {
    let parsed: SynthesisResponse = serde_json::from_str(body).map_err(|err| {
        DomainError::service(
            PipelineStep::Synthesis,
            format!("unparseable response body: {err}"),
        )
    })?;
    let bytes = general_purpose::STANDARD
        .decode(parsed.audio_base64.trim())
        .map_err(|err| {
            DomainError::service(
                PipelineStep::Synthesis,
                format!("response audio is not valid base64: {err}"),
            )
        })?;
    Ok(SynthesizedAudio {
        bytes,
        media_type: parsed.media_type,
    })
}

fn map_transport_error(err: &reqwest::Error) -> DomainError {
    if err.is_timeout() {
        DomainError::timeout(PipelineStep::Synthesis)
    } else {
        DomainError::service(PipelineStep::Synthesis, err.to_string())
    }
}
