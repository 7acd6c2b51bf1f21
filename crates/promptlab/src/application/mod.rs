//! Application Services (Use Cases)

mod prompt_lab;

pub use prompt_lab::PromptLab;
