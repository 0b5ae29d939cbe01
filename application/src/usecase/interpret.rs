use std::sync::Arc;

use async_trait::async_trait;
use interpreter_domain::{
    AudioSource, Credential, DomainError, LanguagePair, SynthesisPort, SynthesisRequest,
    TranscriptionPort, TranscriptionRequest, TranslationPort, TranslationRequest,
};

use crate::{ApplicationError, InterpretOutcome, SessionState};

pub const EMPTY_TRANSCRIPT_ADVISORY: &str = "No speech was recognized. Please try again.";

/// Pipeline execution state for one triggering event. The pipeline returns
/// to `Idle` after `Done`, `Empty`, or any failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Capturing,
    Transcribing,
    Translating,
    Synthesizing,
    Empty,
    Done,
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PipelineState::Idle => "idle",
            PipelineState::Capturing => "capturing",
            PipelineState::Transcribing => "transcribing",
            PipelineState::Translating => "translating",
            PipelineState::Synthesizing => "synthesizing",
            PipelineState::Empty => "empty",
            PipelineState::Done => "done",
        };
        f.write_str(name)
    }
}

#[async_trait]
pub trait InterpretUseCase: Send + Sync {
    /// Runs one full pipeline for a triggering event. Nothing is reused from
    /// earlier runs; every event recomputes from capture.
    async fn interpret(
        &self,
        session: &mut SessionState,
        source: &dyn AudioSource,
    ) -> Result<InterpretOutcome, ApplicationError>;
}

pub struct InterpretUseCaseImpl {
    transcription: Arc<dyn TranscriptionPort>,
    translation: Arc<dyn TranslationPort>,
    synthesis: Arc<dyn SynthesisPort>,
    synthesis_slow: bool,
}

impl InterpretUseCaseImpl {
    pub fn new(
        transcription: Arc<dyn TranscriptionPort>,
        translation: Arc<dyn TranslationPort>,
        synthesis: Arc<dyn SynthesisPort>,
        synthesis_slow: bool,
    ) -> Self {
        Self {
            transcription,
            translation,
            synthesis,
            synthesis_slow,
        }
    }

    async fn run(
        &self,
        pair: LanguagePair,
        credential: Credential,
        source: &dyn AudioSource,
    ) -> Result<InterpretOutcome, ApplicationError> {
        let mut state = PipelineState::Idle;

        advance(&mut state, PipelineState::Capturing);
        let audio = source.capture().await?;
        tracing::debug!(
            source = source.name(),
            byte_count = audio.bytes.len(),
            sample_rate_hz = audio.sample_rate_hz,
            "audio captured"
        );

        advance(&mut state, PipelineState::Transcribing);
        let transcript = self
            .transcription
            .transcribe(TranscriptionRequest {
                audio,
                language: pair.input,
            })
            .await?;
        let transcript = transcript.trim().to_string();

        if transcript.is_empty() {
            advance(&mut state, PipelineState::Empty);
            return Ok(InterpretOutcome::Empty {
                advisory: EMPTY_TRANSCRIPT_ADVISORY.to_string(),
            });
        }
        tracing::debug!(
            input_language = pair.input.code(),
            transcript_chars = transcript.chars().count(),
            "transcript obtained"
        );

        advance(&mut state, PipelineState::Translating);
        let translation = self
            .translation
            .translate(TranslationRequest {
                text: transcript.clone(),
                pair,
                credential,
            })
            .await?;

        advance(&mut state, PipelineState::Synthesizing);
        let audio = self
            .synthesis
            .synthesize(SynthesisRequest {
                text: translation.clone(),
                language: pair.output,
                slow: self.synthesis_slow,
            })
            .await?;

        advance(&mut state, PipelineState::Done);
        Ok(InterpretOutcome::Done {
            transcript,
            translation,
            audio,
        })
    }
}

#[async_trait]
impl InterpretUseCase for InterpretUseCaseImpl {
    async fn interpret(
        &self,
        session: &mut SessionState,
        source: &dyn AudioSource,
    ) -> Result<InterpretOutcome, ApplicationError> {
        let credential = session
            .credential()
            .cloned()
            .ok_or(DomainError::MissingCredential)?;
        let pair = session.pair();
        session.begin_run()?;

        tracing::debug!(
            input_language = pair.input.code(),
            output_language = pair.output.code(),
            source = source.name(),
            "starting interpret pipeline"
        );
        let result = self.run(pair, credential, source).await;

        match &result {
            Ok(outcome) => {
                tracing::debug!(done = outcome.is_done(), "interpret pipeline completed");
                session.finish_run(Some(outcome.clone()));
            }
            Err(error) => {
                tracing::warn!(%error, "interpret pipeline aborted");
                session.finish_run(None);
            }
        }
        result
    }
}

fn advance(state: &mut PipelineState, to: PipelineState) {
    tracing::trace!(from = %state, to = %to, "pipeline transition");
    *state = to;
}
