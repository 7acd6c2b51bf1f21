//! PromptSpec - Building blocks of a structured student prompt

use serde::{Deserialize, Serialize};

/// The five building blocks a student fills in.
///
/// Every field is free-form text. Empty strings are legal and render as
/// empty sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    pub role: String,
    pub task: String,
    pub context: String,
    pub examples: String,
    pub style: String,
}

impl PromptSpec {
    pub fn new(
        role: impl Into<String>,
        task: impl Into<String>,
        context: impl Into<String>,
        examples: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            task: task.into(),
            context: context.into(),
            examples: examples.into(),
            style: style.into(),
        }
    }
}
