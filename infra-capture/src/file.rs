use async_trait::async_trait;
use interpreter_domain::{AudioClip, AudioSource, DomainError};

use crate::ensure_wav_container;

/// User-supplied file bytes, re-wrapped to the expected container format.
/// Synchronous from the pipeline's point of view.
pub struct FileUpload {
    bytes: Vec<u8>,
    sample_rate_hz: u32,
}

impl FileUpload {
    pub fn new(bytes: Vec<u8>, sample_rate_hz: u32) -> Self {
        Self {
            bytes,
            sample_rate_hz,
        }
    }
}

#[async_trait]
impl AudioSource for FileUpload {
    fn name(&self) -> &'static str {
        "file-upload"
    }

    async fn capture(&self) -> Result<AudioClip, DomainError> {
        let bytes = ensure_wav_container(self.bytes.clone(), self.sample_rate_hz)?;
        Ok(AudioClip::new(bytes, self.sample_rate_hz))
    }
}
