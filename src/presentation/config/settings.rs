use std::time::Duration;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

/// Environment variable holding the Google AI credential. Takes precedence
/// over `llm.api_key` from any other source.
pub const API_KEY_ENV_VAR: &str = "GOOGLE_AI_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    pub extraction: ExtractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub pdf_timeout_secs: u64,
}

impl Settings {
    /// Layers defaults, `appsettings.toml`, `appsettings.<env>.toml`,
    /// `APP_*` variables (`APP_SERVER__PORT=9000`) and finally the API key
    /// variable, later sources winning.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.max_upload_mb", 25)?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "gemma-3-27b-it")?
            .set_default(
                "llm.base_url",
                "https://generativelanguage.googleapis.com/v1beta/models",
            )?
            .set_default("llm.request_timeout_secs", 120)?
            .set_default("logging.level", "info,lingochat=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .set_default("extraction.pdf_timeout_secs", 30)?
            .add_source(File::with_name("appsettings").required(false))
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("llm.api_key", std::env::var(API_KEY_ENV_VAR).ok())?
            .build()?
            .try_deserialize()
    }
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl LlmSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl ExtractionSettings {
    pub fn pdf_timeout(&self) -> Duration {
        Duration::from_secs(self.pdf_timeout_secs)
    }
}
