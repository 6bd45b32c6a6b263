/// LLM Client — the single point of entry for all inference calls.
///
/// ARCHITECTURAL RULE: No other module may call the chat completions API directly.
/// Callers depend on the `ChatCompletion` trait; `OpenAiClient` is the production
/// implementation and tests substitute their own.
///
/// Model: gpt-4o (hardcoded — the prompt is tuned for it)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::chat::ChatTurn;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// The model used for every meal idea request.
pub const MODEL: &str = "gpt-4o";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned no choices")]
    EmptyChoices,

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
pub struct ReplyMessage {
    pub content: Option<String>,
}

/// Token counts. Compatible backends may omit any of them.
#[derive(Debug, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

impl CompletionResponse {
    /// Text of the first choice. No further validation of its shape.
    pub fn text(&self) -> Result<&str, LlmError> {
        let choice = self.choices.first().ok_or(LlmError::EmptyChoices)?;
        choice
            .message
            .content
            .as_deref()
            .ok_or(LlmError::EmptyContent)
    }

    /// Builds a single-choice response for stub backends.
    #[cfg(test)]
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: ReplyMessage {
                    content: Some(content.into()),
                },
            }],
            usage: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The inference service seam. Carried in `AppState` as `Arc<dyn ChatCompletion>`.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatTurn],
    ) -> Result<CompletionResponse, LlmError>;
}

/// Chat Completions client over reqwest.
///
/// No retry or fallback: every failure goes straight back to the caller.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatTurn],
    ) -> Result<CompletionResponse, LlmError> {
        let request_body = CompletionRequest { model, messages };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion: CompletionResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}
