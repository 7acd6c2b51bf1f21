//! LLM Provider Port
//!
//! Abstract interface for a single chat-completion round trip.
//! The hosted inference client implements it; tests swap in fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::domain::{CompletionRequest, CompletionResult, PromptLabError};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in a chat-completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// LLM Provider interface
///
/// Each call is one independent request: no conversation memory, no
/// retries, no caching. Errors from the provider are returned unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use promptlab::{CompletionProvider, HfInferenceClient, Config};
///
/// let client = HfInferenceClient::new(Config::from_env()?)?;
/// let text = client.complete_text("Explain overfitting.").await?;
/// ```
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one user message and return the extracted completion
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResult, PromptLabError>;

    /// Complete a prompt with an explicit token budget
    async fn complete_prompt(
        &self,
        prompt: &str,
        max_tokens: NonZeroU32,
    ) -> Result<String, PromptLabError> {
        let request = CompletionRequest::new(prompt).with_max_tokens(max_tokens);
        let result = self.complete(&request).await?;
        Ok(result.text)
    }

    /// Complete a prompt with the default token budget
    async fn complete_text(&self, prompt: &str) -> Result<String, PromptLabError> {
        let result = self.complete(&CompletionRequest::new(prompt)).await?;
        Ok(result.text)
    }

    /// Get the provider name (e.g., "huggingface")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
