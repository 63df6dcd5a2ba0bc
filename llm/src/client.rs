//! HTTP client for the OpenAI chat-completion endpoint.
//!
//! This module provides the [`OpenAiClient`] type which implements the
//! [`Completer`] trait. Each call sends the prompt as a single user-role
//! message and returns the first choice's content.

use crate::traits::{Completer, CompletionError};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Connection settings for [`OpenAiClient`].
///
/// Built once at startup and handed to the client; nothing here is read from
/// global state after construction.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gpt-3.5-turbo".into(),
            api_base: None,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different endpoint, e.g. a mock server.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct OpenAiClient {
    inner: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(config: ClientConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);
        if let Some(api_base) = config.api_base {
            openai_config = openai_config.with_api_base(api_base);
        }
        Self {
            inner: Client::with_config(openai_config),
            model: config.model,
            timeout: config.timeout,
        }
    }
}

#[async_trait]
impl Completer for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages([ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessage {
                    content: prompt.to_owned().into(),
                    name: None,
                },
            )])
            .build()
            .map_err(|e| CompletionError::Api(e.to_string()))?;

        debug!(model = %self.model, "requesting completion");
        let response = timeout(self.timeout, self.inner.chat().create(request))
            .await
            .map_err(|_| CompletionError::Timeout(self.timeout.as_secs()))?
            .map_err(|e| CompletionError::Api(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(CompletionError::EmptyResponse)
    }
}
