//! LLM Client: the single point of entry for all AI provider calls.
//!
//! ARCHITECTURAL RULE: No other module may call the provider API directly.
//! Everything goes through the `AiProvider` trait so handlers can be driven
//! by a stub in tests.
//!
//! One HTTP attempt per call. Callers decide how to degrade on failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

/// Chat model used for plans and quotes. Hardcoded to prevent drift.
pub const CHAT_MODEL: &str = "gpt-4-turbo-preview";
/// Image model used for exercise and meal illustrations.
pub const IMAGE_MODEL: &str = "gpt-image-1";
const IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("AI provider is not configured")]
    NotConfigured,
}

/// A single chat completion request: one system message, one user message.
#[derive(Debug, Clone)]
pub struct ChatRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Ask the provider for a JSON object response.
    pub json_mode: bool,
}

/// The AI provider seam. Carried in `AppState` as `Arc<dyn AiProvider>`.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Returns the assistant message content. May be empty.
    async fn chat(&self, request: ChatRequest<'_>) -> Result<String, LlmError>;

    /// Returns an image URL (or data URL), `None` if the provider gave neither.
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    n: u8,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
    b64_json: Option<String>,
}

impl ImageResponse {
    fn into_url(self) -> Option<String> {
        let first = self.data.into_iter().next()?;
        match (first.url, first.b64_json) {
            (Some(url), _) if !url.is_empty() => Some(url),
            (_, Some(b64)) if !b64.is_empty() => Some(format!("data:image/png;base64,{b64}")),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAI-compatible client
// ────────────────────────────────────────────────────────────────────────────

/// Client for an OpenAI-compatible API (`/chat/completions`, `/images/generations`).
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: Option<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;

        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("AI provider returned {} for {}", status, path);
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl AiProvider for OpenAiClient {
    async fn chat(&self, request: ChatRequest<'_>) -> Result<String, LlmError> {
        let body = ChatCompletionRequest {
            model: CHAT_MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let raw = self.post("/chat/completions", &body).await?.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&raw)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Chat call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion.text().unwrap_or_default().to_string())
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, LlmError> {
        let body = ImageRequest {
            model: IMAGE_MODEL,
            prompt,
            size: IMAGE_SIZE,
            n: 1,
        };

        let raw = self.post("/images/generations", &body).await?.text().await?;
        let images: ImageResponse = serde_json::from_str(&raw)?;

        Ok(images.into_url())
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> OpenAiClient {
        OpenAiClient::new(
            Some("test-key".to_string()),
            &server.base_url(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn chat_request(json_mode: bool) -> ChatRequest<'static> {
        ChatRequest {
            system: "be brief",
            prompt: "hello",
            temperature: 0.7,
            max_tokens: None,
            json_mode,
        }
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[tokio::test]
    async fn test_chat_returns_first_choice_content() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer test-key")
                    .json_body_partial(r#"{"response_format": {"type": "json_object"}}"#);
                then.status(200).json_body(json!({
                    "choices": [{"message": {"role": "assistant", "content": "{\"ok\":true}"}}],
                    "usage": {"prompt_tokens": 10, "completion_tokens": 3}
                }));
            })
            .await;

        let text = client_for(&server).chat(chat_request(true)).await.unwrap();
        assert_eq!(text, "{\"ok\":true}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_chat_error_is_not_retried() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(500)
                    .json_body(json!({"error": {"message": "upstream exploded"}}));
            })
            .await;

        let err = client_for(&server)
            .chat(chat_request(false))
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).body("<html>gateway</html>");
            })
            .await;

        let err = client_for(&server)
            .chat(chat_request(false))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let client =
            OpenAiClient::new(None, "http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        assert!(!client.is_configured());
        let err = client.chat(chat_request(false)).await.unwrap_err();
        assert!(matches!(err, LlmError::NotConfigured));
    }

    #[tokio::test]
    async fn test_image_prefers_url() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/images/generations")
                    .json_body_partial(r#"{"model": "gpt-image-1", "size": "1024x1024"}"#);
                then.status(200)
                    .json_body(json!({"data": [{"url": "https://img.example/squat.png"}]}));
            })
            .await;

        let url = client_for(&server).generate_image("squat").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://img.example/squat.png"));
    }

    #[tokio::test]
    async fn test_image_falls_back_to_data_url() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/images/generations");
                then.status(200).json_body(json!({"data": [{"b64_json": "aGVsbG8="}]}));
            })
            .await;

        let url = client_for(&server).generate_image("salad").await.unwrap();
        assert_eq!(url.as_deref(), Some("data:image/png;base64,aGVsbG8="));
    }

    #[tokio::test]
    async fn test_image_empty_data_is_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/images/generations");
                then.status(200).json_body(json!({"data": []}));
            })
            .await;

        let url = client_for(&server).generate_image("salad").await.unwrap();
        assert!(url.is_none());
    }
}
