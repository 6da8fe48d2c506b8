use crate::presentation::config::{Environment, LoggingSettings};

pub const DEFAULT_LOG_FILTER: &str = "info,jarvis=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub filter: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        let filter = if settings.level.trim().is_empty() {
            DEFAULT_LOG_FILTER.to_string()
        } else {
            settings.level.clone()
        };
        Self {
            environment,
            filter,
            json_format: settings.json,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            filter: DEFAULT_LOG_FILTER.to_string(),
            json_format: false,
        }
    }
}
