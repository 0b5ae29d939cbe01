use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use interpreter_domain::{AudioClip, AudioSource, DomainError};

use crate::ensure_wav_container;

/// Capture delivered out of band by a browser recorder as a base64-encoded
/// container. The payload is handed to this source by the triggering cycle
/// that observed its arrival.
pub struct BrowserCapture {
    payload: String,
    sample_rate_hz: u32,
}

impl BrowserCapture {
    pub fn new(payload: String, sample_rate_hz: u32) -> Self {
        Self {
            payload,
            sample_rate_hz,
        }
    }
}

#[async_trait]
impl AudioSource for BrowserCapture {
    fn name(&self) -> &'static str {
        "browser"
    }

    async fn capture(&self) -> Result<AudioClip, DomainError> {
        // Recorders commonly prepend a `data:audio/...;base64,` scheme.
        let encoded = match self.payload.split_once(',') {
            Some((prefix, rest)) if prefix.starts_with("data:") => rest,
            _ => self.payload.as_str(),
        };
        let bytes = general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|err| DomainError::capture(format!("malformed base64 payload: {err}")))?;
        let bytes = ensure_wav_container(bytes, self.sample_rate_hz)?;
        Ok(AudioClip::new(bytes, self.sample_rate_hz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(bytes: &[u8]) -> String {
        general_purpose::STANDARD.encode(bytes)
    }

    #[tokio::test]
    async fn decodes_plain_base64_payload() {
        let payload = encode(b"RIFF0000WAVEfmt ");
        let clip = BrowserCapture::new(payload, 16_000)
            .capture()
            .await
            .expect("payload decodes");
        assert_eq!(&clip.bytes[..4], b"RIFF");
    }

    #[tokio::test]
    async fn strips_data_url_prefix() {
        let payload = format!("data:audio/wav;base64,{}", encode(b"RIFF0000WAVEfmt "));
        let clip = BrowserCapture::new(payload, 16_000)
            .capture()
            .await
            .expect("data url decodes");
        assert_eq!(&clip.bytes[..4], b"RIFF");
    }

    #[tokio::test]
    async fn malformed_base64_is_a_capture_error() {
        let error = BrowserCapture::new("!!!not-base64!!!".to_string(), 16_000)
            .capture()
            .await
            .expect_err("payload is garbage");
        assert!(matches!(error, DomainError::Capture(message) if message.contains("base64")));
    }
}
