//! Completion - Request, choices and extracted text of a chat completion

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Token budget used when the caller does not pick one
pub const DEFAULT_MAX_TOKENS: NonZeroU32 = match NonZeroU32::new(256) {
    Some(n) => n,
    None => unreachable!(),
};

/// A single-prompt completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: NonZeroU32,
}

impl CompletionRequest {
    /// Create a request with the default token budget
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set the token budget
    pub fn with_max_tokens(mut self, max_tokens: NonZeroU32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// One candidate in a chat-completion response.
///
/// The same response schema serves streaming and non-streaming APIs, so a
/// choice may carry a finished message, an incremental delta, or both.
/// Absent, null and empty content all decode to the variant without it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawChoice")]
pub enum Choice {
    Message(String),
    Delta(String),
    MessageAndDelta { message: String, delta: String },
    Empty,
}

impl Choice {
    /// Append this choice's text: message content first, then delta content
    pub fn append_to(&self, out: &mut String) {
        match self {
            Choice::Message(message) => out.push_str(message),
            Choice::Delta(delta) => out.push_str(delta),
            Choice::MessageAndDelta { message, delta } => {
                out.push_str(message);
                out.push_str(delta);
            }
            Choice::Empty => {}
        }
    }
}

#[derive(Deserialize)]
struct RawChoice {
    #[serde(default)]
    message: Option<RawContent>,
    #[serde(default)]
    delta: Option<RawContent>,
}

#[derive(Deserialize)]
struct RawContent {
    #[serde(default)]
    content: Option<String>,
}

impl RawContent {
    fn into_text(self) -> Option<String> {
        self.content.filter(|c| !c.is_empty())
    }
}

impl From<RawChoice> for Choice {
    fn from(raw: RawChoice) -> Self {
        let message = raw.message.and_then(RawContent::into_text);
        let delta = raw.delta.and_then(RawContent::into_text);

        match (message, delta) {
            (Some(message), Some(delta)) => Choice::MessageAndDelta { message, delta },
            (Some(message), None) => Choice::Message(message),
            (None, Some(delta)) => Choice::Delta(delta),
            (None, None) => Choice::Empty,
        }
    }
}

/// Text extracted from a completion response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub text: String,
}

impl CompletionResult {
    /// Concatenate every choice's text in response order.
    ///
    /// A choice carrying both a message and a delta contributes both, so
    /// the same content may appear twice. Zero choices yield empty text.
    pub fn from_choices<'a>(choices: impl IntoIterator<Item = &'a Choice>) -> Self {
        let mut text = String::new();
        for choice in choices {
            choice.append_to(&mut text);
        }
        Self { text }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for CompletionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Vec<Choice> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_default_max_tokens() {
        let request = CompletionRequest::new("Explain overfitting.");
        assert_eq!(request.max_tokens.get(), 256);

        let request = request.with_max_tokens(NonZeroU32::new(64).unwrap());
        assert_eq!(request.max_tokens.get(), 64);
    }

    #[test]
    fn test_decode_choice_variants() {
        let choices = decode(json!([
            {"index": 0, "message": {"role": "assistant", "content": "Hello"}},
            {"index": 1, "delta": {"content": "world"}},
            {"index": 2, "message": {"content": "a"}, "delta": {"content": "b"}},
            {"index": 3, "message": {"content": null}, "delta": {}},
            {"index": 4, "message": {"content": ""}},
            {"index": 5},
            {"index": 6, "message": null, "delta": {"content": "x"}},
            {"index": 7, "message": {"content": "y"}, "delta": null}
        ]));

        assert_eq!(
            choices,
            vec![
                Choice::Message("Hello".to_string()),
                Choice::Delta("world".to_string()),
                Choice::MessageAndDelta {
                    message: "a".to_string(),
                    delta: "b".to_string()
                },
                Choice::Empty,
                Choice::Empty,
                Choice::Empty,
                Choice::Delta("x".to_string()),
                Choice::Message("y".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_message_choice() {
        let choices = decode(json!([{"message": {"content": "Hello"}}]));
        assert_eq!(CompletionResult::from_choices(&choices).text, "Hello");
    }

    #[test]
    fn test_zero_choices_is_empty() {
        let choices: Vec<Choice> = Vec::new();
        let result = CompletionResult::from_choices(&choices);
        assert!(result.is_empty());
        assert_eq!(result.text, "");
    }

    #[test]
    fn test_concatenates_message_then_delta_in_order() {
        let choices = decode(json!([
            {"message": {"content": "m1"}, "delta": {"content": "d1"}},
            {"delta": {"content": "d2"}},
            {"message": {"content": ""}, "delta": {"content": ""}},
            {"message": {"content": "m4"}}
        ]));

        assert_eq!(CompletionResult::from_choices(&choices).text, "m1d1d2m4");
    }

    #[test]
    fn test_identical_message_and_delta_counted_twice() {
        let choices = decode(json!([
            {"message": {"content": "same"}, "delta": {"content": "same"}}
        ]));
        assert_eq!(CompletionResult::from_choices(&choices).text, "samesame");
    }

    #[test]
    fn test_non_object_choice_rejected() {
        let result: Result<Vec<Choice>, _> = serde_json::from_value(json!(["Hello"]));
        assert!(result.is_err());
    }
}
