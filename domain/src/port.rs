use std::time::Duration;

use async_trait::async_trait;

use crate::{
    AudioClip, DomainError, SynthesisRequest, SynthesizedAudio, TranscriptionRequest,
    TranslationRequest,
};

/// One capture mechanism. All implementations normalize their input to the
/// common [`AudioClip`] contract before the pipeline sees it.
#[async_trait]
pub trait AudioSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn capture(&self) -> Result<AudioClip, DomainError>;
}

/// Recording device behind microphone capture. Returns WAV-compatible bytes
/// recorded over the requested duration.
#[async_trait]
pub trait RecordingPort: Send + Sync {
    async fn record(
        &self,
        duration: Duration,
        sample_rate_hz: u32,
    ) -> Result<Vec<u8>, DomainError>;
}

#[async_trait]
pub trait TranscriptionPort: Send + Sync {
    async fn transcribe(&self, request: TranscriptionRequest) -> Result<String, DomainError>;
}

#[async_trait]
pub trait TranslationPort: Send + Sync {
    async fn translate(&self, request: TranslationRequest) -> Result<String, DomainError>;
}

#[async_trait]
pub trait SynthesisPort: Send + Sync {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, DomainError>;
}
