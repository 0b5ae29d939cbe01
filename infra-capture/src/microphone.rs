use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use interpreter_domain::{AudioClip, AudioSource, DomainError, RecordingPort};

use crate::ensure_wav_container;

/// Grace added on top of the capture duration before the device call is
/// considered stuck.
const DEVICE_GRACE: Duration = Duration::from_secs(2);

/// Live microphone capture. Blocks the triggering event for the configured
/// duration and returns whatever the device recorded.
pub struct MicrophoneCapture {
    device: Arc<dyn RecordingPort>,
    duration: Duration,
    sample_rate_hz: u32,
}

impl MicrophoneCapture {
    pub fn new(device: Arc<dyn RecordingPort>, duration: Duration, sample_rate_hz: u32) -> Self {
        Self {
            device,
            duration,
            sample_rate_hz,
        }
    }
}

#[async_trait]
impl AudioSource for MicrophoneCapture {
    fn name(&self) -> &'static str {
        "microphone"
    }

    async fn capture(&self) -> Result<AudioClip, DomainError> {
        tracing::debug!(
            duration_secs = self.duration.as_secs(),
            sample_rate_hz = self.sample_rate_hz,
            "recording from microphone"
        );
        let recording = self.device.record(self.duration, self.sample_rate_hz);
        let bytes = tokio::time::timeout(self.duration + DEVICE_GRACE, recording)
            .await
            .map_err(|_| DomainError::capture("recording device did not stop in time"))??;
        let bytes = ensure_wav_container(bytes, self.sample_rate_hz)?;
        Ok(AudioClip::new(bytes, self.sample_rate_hz))
    }
}
