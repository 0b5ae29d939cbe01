use serde::{Deserialize, Serialize};

use crate::Language;

/// Input/output language selection for a session. Identical input and output
/// is permitted; the pipeline does not forbid it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub input: Language,
    pub output: Language,
}

impl LanguagePair {
    pub fn new(input: Language, output: Language) -> Self {
        Self { input, output }
    }

    /// Exchanges input and output. Both fields are already members of the
    /// supported set, so no validation is needed.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.input, &mut self.output);
    }
}

/// Encoded audio bytes plus the sample-rate contract expected by the
/// transcription service (16 kHz mono, WAV-compatible).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub sample_rate_hz: u32,
}

impl AudioClip {
    pub const CONTRACT_SAMPLE_RATE_HZ: u32 = 16_000;

    pub fn new(bytes: Vec<u8>, sample_rate_hz: u32) -> Self {
        Self {
            bytes,
            sample_rate_hz,
        }
    }
}

/// Opaque API key authorizing the translation service. Held for the session
/// lifetime, never persisted, never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Playable audio produced by the synthesis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

/// The pipeline step an external failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Capture,
    Transcription,
    Translation,
    Synthesis,
}

impl std::fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PipelineStep::Capture => "capture",
            PipelineStep::Transcription => "transcription",
            PipelineStep::Translation => "translation",
            PipelineStep::Synthesis => "synthesis",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio: AudioClip,
    pub language: Language,
}

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub pair: LanguagePair,
    pub credential: Credential,
}

#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub text: String,
    pub language: Language,
    pub slow: bool,
}
