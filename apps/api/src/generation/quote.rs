//! Daily motivational quote. Never fails: provider trouble yields a canned line.

use tracing::error;

use crate::generation::prompts::{QUOTE_PROMPT, QUOTE_SYSTEM};
use crate::llm_client::{AiProvider, ChatRequest};

const QUOTE_TEMPERATURE: f32 = 0.8;
const QUOTE_MAX_TOKENS: u32 = 50;

/// Returned when the provider answers with nothing.
pub const EMPTY_QUOTE_FALLBACK: &str = "Stay strong and consistent!";
/// Returned when the provider call fails.
pub const ERROR_QUOTE_FALLBACK: &str = "Consistency is the key to transformation!";

pub async fn generate_quote(provider: &dyn AiProvider) -> String {
    let reply = provider
        .chat(ChatRequest {
            system: QUOTE_SYSTEM,
            prompt: QUOTE_PROMPT,
            temperature: QUOTE_TEMPERATURE,
            max_tokens: Some(QUOTE_MAX_TOKENS),
            json_mode: false,
        })
        .await;

    match reply {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                EMPTY_QUOTE_FALLBACK.to_string()
            } else {
                text.to_string()
            }
        }
        Err(e) => {
            error!("Error generating motivational quote: {e}");
            ERROR_QUOTE_FALLBACK.to_string()
        }
    }
}
