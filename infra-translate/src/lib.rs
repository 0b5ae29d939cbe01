mod prompt;

use std::time::Duration;

use async_trait::async_trait;
use interpreter_domain::{DomainError, PipelineStep, TranslationPort, TranslationRequest};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

pub use prompt::build_instruction;

/// JSON client for a Gemini-style `generateContent` endpoint. One blocking
/// request per pipeline run, full response text trimmed; no retry, no
/// streaming. The credential travels as the `key` query parameter and is
/// validated by the service on first use.
pub struct GenerativeTranslationClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerativeTranslationClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|err| {
                DomainError::internal(format!("could not build translation client: {err}"))
            })?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl TranslationPort for GenerativeTranslationClient {
    async fn translate(&self, request: TranslationRequest) -> Result<String, DomainError> {
        let instruction = build_instruction(request.pair, &request.text);
        let body = json!({
            "contents": [{ "parts": [{ "text": instruction }] }],
        });

        tracing::debug!(
            model = %self.model,
            input_language = request.pair.input.code(),
            output_language = request.pair.output.code(),
            "sending translation request"
        );
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let response = self
            .http
            .post(url)
            .query(&[("key", request.credential.expose())])
            .json(&body)
            .send()
            .await
            .map_err(|err| map_transport_error(PipelineStep::Translation, &err))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|err| map_transport_error(PipelineStep::Translation, &err))?;
        if !status.is_success() {
            return Err(error_for_status(status, &payload));
        }
        parse_generate_content_body(&payload)
    }
}

fn parse_generate_content_body(body: &str) -> Result<String, DomainError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body).map_err(|err| {
        DomainError::service(
            PipelineStep::Translation,
            format!("unparseable response body: {err}"),
        )
    })?;
    let candidate = parsed.candidates.into_iter().next().ok_or_else(|| {
        DomainError::service(PipelineStep::Translation, "response carried no candidates")
    })?;
    let text = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect::<Vec<_>>()
        .join("");
    Ok(text.trim().to_string())
}

fn map_transport_error(step: PipelineStep, err: &reqwest::Error) -> DomainError {
    if err.is_timeout() {
        DomainError::timeout(step)
    } else {
        DomainError::service(step, err.to_string())
    }
}

fn error_for_status(status: StatusCode, body: &str) -> DomainError {
    // The service reports a bad key either as 401/403 or as a 400 whose body
    // names the API key.
    let key_rejected = status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || (status == StatusCode::BAD_REQUEST && body.to_ascii_lowercase().contains("api key"));
    if key_rejected {
        DomainError::unauthorized(PipelineStep::Translation, format!("HTTP {status}"))
    } else {
        DomainError::service(PipelineStep::Translation, format!("HTTP {status}: {body}"))
    }
}
