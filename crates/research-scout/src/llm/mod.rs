//! Language model capability.
//!
//! The synthesizers only need `messages -> text`. [`OpenAiCompatModel`]
//! provides that against any endpoint that speaks the OpenAI chat
//! completions format; tests substitute their own [`LanguageModel`].

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};

/// Chat message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions for the model.
    System,
    /// Caller prompt.
    User,
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author of the message.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// System message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    /// User message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// A generative model that turns a conversation into text.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Run one completion and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-2xx response.
    async fn invoke(&self, messages: &[ChatMessage]) -> ClientResult<String>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionResponse {
    /// `choices[0].message.content`, or empty when any part is missing.
    fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default()
    }
}

/// OpenAI-compatible chat completions client.
#[derive(Clone)]
pub struct OpenAiCompatModel {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

impl OpenAiCompatModel {
    /// Create a model client from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.llm_api_url.trim_end_matches('/')),
            api_key: config.llm_api_key.clone(),
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
        })
    }
}

#[async_trait]
impl LanguageModel for OpenAiCompatModel {
    async fn invoke(&self, messages: &[ChatMessage]) -> ClientResult<String> {
        let body = CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        tracing::debug!(model = %self.model, messages = messages.len(), "Invoking language model");

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                500..=599 => ClientError::server(status.as_u16(), text),
                code => ClientError::unexpected_status(code, text),
            });
        }

        let body = response.text().await?;
        let parsed: CompletionResponse = serde_json::from_str(&body)?;
        Ok(parsed.into_text())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for OpenAiCompatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatModel")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}
