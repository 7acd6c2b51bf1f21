//! Hugging Face Inference client
//!
//! Calls the OpenAI-compatible chat-completion route of the Hugging Face
//! inference router. One request per call, no retries.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{Choice, CompletionRequest, CompletionResult, PromptLabError};
use crate::ports::{ChatMessage, CompletionProvider};

/// Chat-completion client for a hosted model
#[derive(Clone)]
pub struct HfInferenceClient {
    client: Client,
    config: Config,
}

impl HfInferenceClient {
    /// Create a client. The HTTP handle is built once and reused.
    pub fn new(config: Config) -> Result<Self, PromptLabError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| PromptLabError::Transport(err.to_string()))?;

        Ok(Self { client, config })
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[async_trait]
impl CompletionProvider for HfInferenceClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResult, PromptLabError> {
        let url = self.config.chat_completions_url();
        let body = ChatCompletionRequest {
            model: &self.config.model_id,
            messages: vec![ChatMessage::user(request.prompt.as_str())],
            max_tokens: request.max_tokens.get(),
        };

        debug!(
            model = %self.config.model_id,
            prompt_len = request.prompt.len(),
            max_tokens = body.max_tokens,
            "Sending chat completion request"
        );

        let mut http_request = self.client.post(&url).json(&body);
        if let Some(token) = &self.config.api_token {
            http_request = http_request.bearer_auth(token);
        }

        let response = http_request
            .send()
            .await
            .map_err(|err| PromptLabError::Transport(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| PromptLabError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(map_http_error(status, text));
        }

        let payload: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|err| PromptLabError::Decode(err.to_string()))?;

        let result = CompletionResult::from_choices(&payload.choices);

        info!(
            model = %self.config.model_id,
            choices = payload.choices.len(),
            output_len = result.text.len(),
            "Chat completion received"
        );

        Ok(result)
    }

    fn provider_name(&self) -> &str {
        "huggingface"
    }

    fn model_id(&self) -> &str {
        &self.config.model_id
    }
}

// ============================================
// Helper Functions
// ============================================

/// Pull the provider's message out of an error body.
///
/// The router answers with either `{"error": "..."}` or
/// `{"error": {"message": "..."}}`; anything else is passed through raw.
fn map_http_error(status: StatusCode, body: String) -> PromptLabError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            let error = json.get("error")?;
            error
                .as_str()
                .or_else(|| error.get("message").and_then(|msg| msg.as_str()))
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    PromptLabError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::num::NonZeroU32;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HfInferenceClient {
        let config = Config::default()
            .with_base_url(format!("{}/v1", server.uri()))
            .with_model("test/model")
            .with_api_token("hf_test");
        HfInferenceClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_sends_single_user_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer hf_test"))
            .and(body_json(json!({
                "model": "test/model",
                "messages": [{"role": "user", "content": "Explain overfitting."}],
                "max_tokens": 256
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Hello"},
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let text = client.complete_text("Explain overfitting.").await.unwrap();

        assert_eq!(text, "Hello");
    }

    #[tokio::test]
    async fn test_custom_token_budget() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_json(json!({
                "model": "test/model",
                "messages": [{"role": "user", "content": "hi"}],
                "max_tokens": 32
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let text = client
            .complete_prompt("hi", NonZeroU32::new(32).unwrap())
            .await
            .unwrap();

        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_concatenates_all_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"content": "A"}},
                    {"delta": {"content": "B"}},
                    {"message": {"content": "C"}, "delta": {"content": "D"}},
                    {"message": {"content": null}}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .complete(&CompletionRequest::new("prompt"))
            .await
            .unwrap();

        assert_eq!(result.text, "ABCD");
    }

    #[tokio::test]
    async fn test_no_token_sends_no_auth_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let config = Config::default().with_base_url(server.uri());
        let client = HfInferenceClient::new(config).unwrap();
        client.complete_text("hi").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.path(), "/chat/completions");
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "Invalid credentials in Authorization header"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.complete_text("hi").await.unwrap_err();

        match err {
            PromptLabError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials in Authorization header");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_nested_error_message_and_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "error": {"message": "max_tokens too large", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.complete_text("hi").await.unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert!(err.to_string().contains("max_tokens too large"));

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.complete_text("hi").await.unwrap_err();
        assert_eq!(err.to_string(), "API error (503): upstream unavailable");
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "generated_text": "Hello"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.complete_text("hi").await.unwrap_err();
        assert!(matches!(err, PromptLabError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = Config::default().with_base_url(format!("http://{}", addr));

        let client = HfInferenceClient::new(config).unwrap();
        let err = client.complete_text("hi").await.unwrap_err();
        assert!(matches!(err, PromptLabError::Transport(_)));
    }

    #[test]
    fn test_provider_identity() {
        let client = HfInferenceClient::new(Config::default().with_model("org/model")).unwrap();
        assert_eq!(client.provider_name(), "huggingface");
        assert_eq!(client.model_id(), "org/model");
    }
}
