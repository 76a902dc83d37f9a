mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    API_KEY_ENV_VAR, ExtractionSettings, LlmSettings, LoggingSettings, ServerSettings, Settings,
};
