use std::sync::Arc;

use interpreter_domain::AudioSource;

/// Which capture mechanism a triggering event asks for, with the data that
/// mechanism needs.
#[derive(Debug, Clone)]
pub enum CaptureRequest {
    /// Record from the live microphone for the configured duration.
    Microphone,
    /// A browser recorder delivered this base64 payload out of band.
    Browser { payload: String },
    /// The user supplied a file.
    File { bytes: Vec<u8> },
}

/// Builds the concrete [`AudioSource`] for a triggering event. Implemented by
/// the wiring layer so the presentation layer never touches capture
/// machinery directly.
pub trait AudioSourceFactory: Send + Sync {
    fn create(&self, request: CaptureRequest) -> Arc<dyn AudioSource>;
}
