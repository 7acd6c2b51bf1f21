//! Prompt Lab Application Service
//!
//! Orchestrates the flows a student goes through: build a prompt, run it,
//! compare two prompts, ask for feedback on a prompt.

use std::num::NonZeroU32;
use std::sync::Arc;

use crate::domain::{
    build_explain_prompt, build_student_prompt, Attempt, PromptLabError, PromptSpec,
    DEFAULT_MAX_TOKENS,
};
use crate::ports::CompletionProvider;

/// Application service over a completion provider
pub struct PromptLab<P: CompletionProvider> {
    provider: Arc<P>,
}

impl<P: CompletionProvider> Clone for PromptLab<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P: CompletionProvider> PromptLab<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Build the structured prompt from the spec and run it
    pub async fn generate(
        &self,
        spec: &PromptSpec,
        max_tokens: NonZeroU32,
    ) -> Result<Attempt, PromptLabError> {
        let prompt = build_student_prompt(spec);
        self.run(prompt, max_tokens).await
    }

    /// Run a free-form prompt
    pub async fn run(
        &self,
        prompt: impl Into<String>,
        max_tokens: NonZeroU32,
    ) -> Result<Attempt, PromptLabError> {
        let prompt = prompt.into();
        let answer = self.provider.complete_prompt(&prompt, max_tokens).await?;

        tracing::debug!(
            provider = self.provider.provider_name(),
            answer_len = answer.len(),
            "Prompt completed"
        );

        Ok(Attempt { prompt, answer })
    }

    /// Ask the model to critique a prompt and the answer it produced
    pub async fn explain(&self, attempt: &Attempt) -> Result<String, PromptLabError> {
        let explain_prompt = build_explain_prompt(&attempt.prompt, &attempt.answer);
        self.provider
            .complete_prompt(&explain_prompt, DEFAULT_MAX_TOKENS)
            .await
    }

    /// Run prompt A, then prompt B.
    ///
    /// The runs are independent: B is sent even when A fails, and each
    /// side carries its own result.
    pub async fn compare(
        &self,
        prompt_a: impl Into<String>,
        prompt_b: impl Into<String>,
        max_tokens: NonZeroU32,
    ) -> (
        Result<Attempt, PromptLabError>,
        Result<Attempt, PromptLabError>,
    ) {
        let a = self.run(prompt_a, max_tokens).await;
        let b = self.run(prompt_b, max_tokens).await;
        (a, b)
    }
}
