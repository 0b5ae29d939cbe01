mod browser;
mod container;
mod file;
mod microphone;

pub use browser::BrowserCapture;
pub use container::ensure_wav_container;
pub use file::FileUpload;
pub use microphone::MicrophoneCapture;
