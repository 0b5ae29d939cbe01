use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub type AppConfig = InterpreterConfig;

const ENV_PREFIX: &str = "INTERPRETER_SERVICE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpreterConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_stt_endpoint")]
    pub stt: RestEndpointConfig,
    #[serde(default = "default_translate_endpoint")]
    pub translate: RestEndpointConfig,
    #[serde(default = "default_tts_endpoint")]
    pub tts: RestEndpointConfig,
    #[serde(default = "default_translation_model")]
    pub translation_model: String,
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub synthesis_slow: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestEndpointConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Fixed microphone capture duration; recording stops when it elapses.
    #[serde(default = "default_capture_duration_secs")]
    pub duration_secs: u64,
    #[serde(default = "default_sample_rate_hz")]
    pub sample_rate_hz: u32,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            service: ServiceConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            stt: default_stt_endpoint(),
            translate: default_translate_endpoint(),
            tts: default_tts_endpoint(),
            translation_model: default_translation_model(),
            capture: CaptureConfig::default(),
            synthesis_slow: false,
        }
    }
}

impl Default for RestEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_capture_duration_secs(),
            sample_rate_hz: default_sample_rate_hz(),
        }
    }
}

/// Builds the config from defaults, then applies `INTERPRETER_SERVICE_*`
/// environment overrides.
pub fn load_config() -> Result<InterpreterConfig, ConfigError> {
    let mut config = InterpreterConfig::default();

    if let Some(host) = env_string("SERVER_HOST") {
        config.server.host = host;
    }
    if let Some(port) = env_parse::<u16>("SERVER_PORT")? {
        config.server.port = port;
    }
    if let Some(level) = env_string("LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(url) = env_string("STT_BASE_URL") {
        config.service.stt.base_url = url;
    }
    if let Some(url) = env_string("TRANSLATE_BASE_URL") {
        config.service.translate.base_url = url;
    }
    if let Some(url) = env_string("TTS_BASE_URL") {
        config.service.tts.base_url = url;
    }
    if let Some(model) = env_string("TRANSLATION_MODEL") {
        config.service.translation_model = model;
    }
    if let Some(duration) = env_parse::<u64>("CAPTURE_DURATION_SECS")? {
        config.service.capture.duration_secs = duration;
    }
    if let Some(slow) = env_parse::<bool>("SYNTHESIS_SLOW")? {
        config.service.synthesis_slow = slow;
    }

    Ok(config)
}

pub fn setup_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{key}")).ok()
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    let Some(raw) = env_string(key) else {
        return Ok(None);
    };
    raw.parse::<T>()
        .map(Some)
        .map_err(|err| ConfigError::InvalidValue {
            key: format!("{ENV_PREFIX}_{key}"),
            message: err.to_string(),
        })
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:9000".to_string()
}

fn default_stt_endpoint() -> RestEndpointConfig {
    RestEndpointConfig {
        base_url: "http://127.0.0.1:9001".to_string(),
        ..RestEndpointConfig::default()
    }
}

fn default_translate_endpoint() -> RestEndpointConfig {
    RestEndpointConfig {
        base_url: "https://generativelanguage.googleapis.com".to_string(),
        ..RestEndpointConfig::default()
    }
}

fn default_tts_endpoint() -> RestEndpointConfig {
    RestEndpointConfig {
        base_url: "http://127.0.0.1:9002".to_string(),
        ..RestEndpointConfig::default()
    }
}

fn default_translation_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    3_000
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_capture_duration_secs() -> u64 {
    5
}

fn default_sample_rate_hz() -> u32 {
    16_000
}
