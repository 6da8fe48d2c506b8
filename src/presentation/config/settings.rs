use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::prompts::{
    DEFAULT_SYNTHESIS_MODEL, DEFAULT_TRANSCRIPT_ANALYSIS_MODEL, DEFAULT_VISION_MODEL,
};

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";
pub(crate) const MEBIBYTE: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub models: ModelSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    pub logging: LoggingSettings,
    pub scaffold: ScaffoldSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_mb: usize,
}

impl ServerSettings {
    /// Request body limit in bytes, or `None` when it overflows `usize`.
    pub fn max_body_bytes(&self) -> Option<usize> {
        self.max_body_mb.checked_mul(MEBIBYTE)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: String,
    pub timeout_seconds: u64,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Groq,
    #[serde(rename = "openai")]
    OpenAi,
    Custom,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    pub vision: String,
    pub transcription_analysis: String,
    pub synthesis: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSettings {
    /// Expected bearer token. When unset, any bearer token is accepted.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScaffoldSettings {
    pub enabled: bool,
    pub mock_response_delay_ms: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("llm.api_key is empty; set GROQ_API_KEY or APP__LLM__API_KEY")]
    MissingApiKey,
    #[error("llm.base_url is required for the custom provider")]
    MissingBaseUrl,
    #[error("server.max_body_mb must be greater than zero and fit in usize as bytes")]
    InvalidBodyLimit,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}` (optional),
    /// `APP__*` variables and the legacy `GROQ_API_KEY` / `API_AUTH_TOKEN`
    /// variables, then validates the result.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let builder = Self::defaults()?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .set_override_option("llm.api_key", non_empty_env("GROQ_API_KEY"))?
            .set_override_option("auth.token", non_empty_env("API_AUTH_TOKEN"))?;

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.max_body_mb", 10)?
            .set_default("llm.provider", "groq")?
            .set_default("llm.timeout_seconds", 60)?
            .set_default("models.vision", DEFAULT_VISION_MODEL)?
            .set_default("models.transcription_analysis", DEFAULT_TRANSCRIPT_ANALYSIS_MODEL)?
            .set_default("models.synthesis", DEFAULT_SYNTHESIS_MODEL)?
            .set_default("logging.level", "info,jarvis=debug,tower_http=debug")?
            .set_default("logging.json", false)?
            .set_default("scaffold.enabled", false)?
            .set_default("scaffold.mock_response_delay_ms", 0)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.scaffold.enabled && self.llm.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey);
        }
        let has_base_url = self
            .llm
            .base_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        if self.llm.provider == LlmProvider::Custom && !has_base_url {
            return Err(SettingsError::MissingBaseUrl);
        }
        if self.server.max_body_mb == 0 || self.server.max_body_bytes().is_none() {
            return Err(SettingsError::InvalidBodyLimit);
        }
        Ok(())
    }

    /// The configured auth token, ignoring blank values.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
