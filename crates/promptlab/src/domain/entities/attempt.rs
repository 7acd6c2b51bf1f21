//! Attempt - A prompt and the answer the model gave to it

use serde::{Deserialize, Serialize};

/// One submitted prompt together with the model's answer.
///
/// Kept around by the caller so the pair can be handed to the explain
/// template afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub prompt: String,
    pub answer: String,
}

impl Attempt {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}
