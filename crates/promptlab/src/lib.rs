//! Prompt Lab Library
//!
//! Prompt construction and chat-completion retrieval for a prompt
//! engineering teaching tool.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): pure value types and text templates
//!   - `entities/`: PromptSpec, completion request/choices/result, Attempt
//!   - `value_objects/`: QuestName
//!   - `templates`: student prompt and explain prompt builders
//!   - `errors`: PromptLabError
//!
//! - **Ports** (`ports/`): the `CompletionProvider` trait
//! - **Services** (`services/`): Hugging Face inference client
//! - **Application** (`application/`): the `PromptLab` use-case service
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptlab::{
//!     build_student_prompt, CompletionProvider, Config, HfInferenceClient, PromptSpec,
//! };
//!
//! let client = HfInferenceClient::new(Config::from_env()?)?;
//! let spec = PromptSpec::new("Tutor", "Explain overfitting", "Intro ML", "", "Bullet points");
//! let answer = client.complete_text(&build_student_prompt(&spec)).await?;
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use application::PromptLab;
pub use config::Config;
pub use domain::{
    build_explain_prompt, build_student_prompt, quest_instruction, Attempt, Choice,
    CompletionRequest, CompletionResult, PromptLabError, PromptSpec, QuestName,
    DEFAULT_MAX_TOKENS,
};
pub use ports::{ChatMessage, CompletionProvider, MessageRole};
pub use services::HfInferenceClient;
