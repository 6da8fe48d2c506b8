use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{ChatMessage, ContentPart, MessageContent};
use crate::presentation::config::{LlmProvider, LlmSettings};

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completion client for any OpenAI-compatible endpoint (Groq, OpenAI,
/// self-hosted gateways).
pub struct OpenAiCompatibleClient {
    client: Client,
    base_url: String,
    api_key: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: WireContent<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum WireContent<'a> {
    Text(&'a str),
    Parts(Vec<WirePart<'a>>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WirePart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: WireImageUrl<'a> },
}

#[derive(Serialize)]
struct WireImageUrl<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl<'a> From<&'a ChatMessage> for WireMessage<'a> {
    fn from(message: &'a ChatMessage) -> Self {
        let content = match &message.content {
            MessageContent::Text(text) => WireContent::Text(text.as_str()),
            MessageContent::Parts(parts) => WireContent::Parts(
                parts
                    .iter()
                    .map(|part| match part {
                        ContentPart::Text(text) => WirePart::Text {
                            text: text.as_str(),
                        },
                        ContentPart::Image(image) => WirePart::ImageUrl {
                            image_url: WireImageUrl {
                                url: image.as_data_uri(),
                            },
                        },
                    })
                    .collect(),
            ),
        };
        Self {
            role: message.role.as_str(),
            content,
        }
    }
}

impl OpenAiCompatibleClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    pub fn new(base_url: &str, api_key: &str) -> Result<Self, LlmClientError> {
        Self::with_timeout(base_url, api_key, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, LlmClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmClientError::Configuration(format!("client build: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            max_tokens: None,
            temperature: None,
        })
    }

    pub fn with_sampling(mut self, max_tokens: Option<u32>, temperature: Option<f32>) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatibleClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model,
            messages: messages.iter().map(WireMessage::from).collect(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        tracing::debug!(
            base_url = %self.base_url,
            model,
            message_count = messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let raw_bytes = response
            .bytes()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let completion: ChatCompletionResponse =
            serde_json::from_slice(&raw_bytes).map_err(|e| {
                tracing::error!(
                    raw_response = %String::from_utf8_lossy(&raw_bytes),
                    "Failed to parse chat completion JSON"
                );
                LlmClientError::InvalidResponse(e.to_string())
            })?;

        completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))?
            .message
            .content
            .ok_or_else(|| LlmClientError::InvalidResponse("missing message content".to_string()))
    }
}

/// Builds the client for the configured provider.
pub fn create_llm_client(settings: &LlmSettings) -> Result<OpenAiCompatibleClient, LlmClientError> {
    let base_url = match (settings.provider, settings.base_url.as_deref()) {
        (_, Some(url)) if !url.trim().is_empty() => url.to_string(),
        (LlmProvider::Groq, _) => GROQ_BASE_URL.to_string(),
        (LlmProvider::OpenAi, _) => OPENAI_BASE_URL.to_string(),
        (LlmProvider::Custom, _) => {
            return Err(LlmClientError::Configuration(
                "base_url required for custom provider".to_string(),
            ));
        }
    };

    Ok(OpenAiCompatibleClient::with_timeout(
        &base_url,
        &settings.api_key,
        Duration::from_secs(settings.timeout_seconds),
    )?
    .with_sampling(settings.max_tokens, settings.temperature))
}
