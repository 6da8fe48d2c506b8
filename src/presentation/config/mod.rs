mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AuthSettings, LlmProvider, LlmSettings, LoggingSettings, ModelSettings, ScaffoldSettings,
    ServerSettings, Settings, SettingsError,
};
pub(crate) use settings::MEBIBYTE;
