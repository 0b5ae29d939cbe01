use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Error};
use async_trait::async_trait;
use interpreter_application::{
    AudioSourceFactory, CaptureRequest, InterpretUseCase, InterpretUseCaseImpl,
};
use interpreter_configuration::{AppConfig, RestEndpointConfig};
use interpreter_domain::{
    AudioSource, DomainError, Language, LanguagePair, RecordingPort,
};
use interpreter_http_server::AppState;
use interpreter_infra_capture::{BrowserCapture, FileUpload, MicrophoneCapture};
use interpreter_infra_stt::RestTranscriptionClient;
use interpreter_infra_translate::GenerativeTranslationClient;
use interpreter_infra_tts::RestSynthesisClient;

pub async fn build_and_run(config: AppConfig) -> Result<(), Error> {
    let app = Application::new(config)?;
    app.run().await
}

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

impl Application {
    /// Wires the service with no recording hardware attached; microphone
    /// triggers then fail with a capture error while browser and file
    /// capture work normally. Hosts with a device plug one in through
    /// [`Application::with_recorder`].
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        Self::with_recorder(config, Arc::new(UnavailableRecordingDevice))
    }

    pub fn with_recorder(
        config: AppConfig,
        recorder: Arc<dyn RecordingPort>,
    ) -> Result<Self, Error> {
        let service = &config.service;
        let transcription = Arc::new(RestTranscriptionClient::new(
            service.stt.base_url.as_str(),
            connect_timeout(&service.stt),
            request_timeout(&service.stt),
        )?);
        let translation = Arc::new(GenerativeTranslationClient::new(
            service.translate.base_url.as_str(),
            service.translation_model.as_str(),
            connect_timeout(&service.translate),
            request_timeout(&service.translate),
        )?);
        let synthesis = Arc::new(RestSynthesisClient::new(
            service.tts.base_url.as_str(),
            connect_timeout(&service.tts),
            request_timeout(&service.tts),
        )?);

        let usecase: Arc<dyn InterpretUseCase> = Arc::new(InterpretUseCaseImpl::new(
            transcription,
            translation,
            synthesis,
            service.synthesis_slow,
        ));
        let sources = Arc::new(CaptureSourceFactory {
            recorder,
            duration: Duration::from_secs(service.capture.duration_secs),
            sample_rate_hz: service.capture.sample_rate_hz,
        });
        let default_pair = LanguagePair::new(Language::Korean, Language::Vietnamese);
        let state = AppState::new(usecase, sources, default_pair);

        Ok(Self { config, state })
    }

    pub async fn run(self) -> Result<(), Error> {
        let addr: SocketAddr = format!("{}:{}", self.config.server.host, self.config.server.port)
            .parse()
            .map_err(|err| anyhow!("invalid server address: {err}"))?;
        interpreter_http_server::serve(self.state, addr)
            .await
            .map_err(|err| anyhow!("interpreter http server failed: {err}"))
    }
}

/// Builds the concrete capture source for each triggering event. All three
/// variants share the configured sample-rate contract.
pub struct CaptureSourceFactory {
    pub recorder: Arc<dyn RecordingPort>,
    pub duration: Duration,
    pub sample_rate_hz: u32,
}

impl AudioSourceFactory for CaptureSourceFactory {
    fn create(&self, request: CaptureRequest) -> Arc<dyn AudioSource> {
        match request {
            CaptureRequest::Microphone => Arc::new(MicrophoneCapture::new(
                self.recorder.clone(),
                self.duration,
                self.sample_rate_hz,
            )),
            CaptureRequest::Browser { payload } => {
                Arc::new(BrowserCapture::new(payload, self.sample_rate_hz))
            }
            CaptureRequest::File { bytes } => {
                Arc::new(FileUpload::new(bytes, self.sample_rate_hz))
            }
        }
    }
}

/// Default recording port for hosts without microphone hardware.
pub struct UnavailableRecordingDevice;

#[async_trait]
impl RecordingPort for UnavailableRecordingDevice {
    async fn record(
        &self,
        _duration: Duration,
        _sample_rate_hz: u32,
    ) -> Result<Vec<u8>, DomainError> {
        Err(DomainError::capture("no recording device configured"))
    }
}

fn connect_timeout(config: &RestEndpointConfig) -> Duration {
    Duration::from_millis(config.connect_timeout_ms.max(1))
}

fn request_timeout(config: &RestEndpointConfig) -> Duration {
    Duration::from_millis(config.request_timeout_ms.max(1))
}
