//! Test doubles shared by handler and generation tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::Config;
use crate::history::PlanHistory;
use crate::llm_client::{AiProvider, ChatRequest, LlmError};
use crate::state::AppState;

/// Owned copy of a `ChatRequest` the stub received.
#[derive(Debug, Clone)]
pub struct RecordedChat {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub json_mode: bool,
}

/// Canned `AiProvider`. Errors are built fresh per call since `LlmError` isn't `Clone`.
pub struct StubProvider {
    chat_reply: Result<String, fn() -> LlmError>,
    image_reply: Result<Option<String>, fn() -> LlmError>,
    chat_calls: Mutex<Vec<RecordedChat>>,
    image_prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            chat_reply: Ok(text.into()),
            image_reply: Ok(None),
            chat_calls: Mutex::new(Vec::new()),
            image_prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every call (chat and image) fails with the error `make_err` builds.
    pub fn failing(make_err: fn() -> LlmError) -> Self {
        Self {
            chat_reply: Err(make_err),
            image_reply: Err(make_err),
            chat_calls: Mutex::new(Vec::new()),
            image_prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_image(mut self, url: Option<&str>) -> Self {
        self.image_reply = Ok(url.map(str::to_string));
        self
    }

    pub fn chat_calls(&self) -> Vec<RecordedChat> {
        self.chat_calls.lock().unwrap().clone()
    }

    pub fn image_prompts(&self) -> Vec<String> {
        self.image_prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for StubProvider {
    async fn chat(&self, request: ChatRequest<'_>) -> Result<String, LlmError> {
        self.chat_calls.lock().unwrap().push(RecordedChat {
            system: request.system.to_string(),
            prompt: request.prompt.to_string(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            json_mode: request.json_mode,
        });
        self.chat_reply.clone().map_err(|make| make())
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, LlmError> {
        self.image_prompts.lock().unwrap().push(prompt.to_string());
        self.image_reply.clone().map_err(|make| make())
    }
}

/// App state wired to a stub provider and an empty history.
pub fn test_state(provider: Arc<StubProvider>) -> AppState {
    AppState {
        config: Config::for_tests(),
        ai: provider,
        history: PlanHistory::new(),
    }
}
