// AI-backed generation: alternate plan, daily quote, illustrative images.
// All provider calls go through llm_client::AiProvider, one call per request.

pub mod ai_plan;
pub mod handlers;
pub mod images;
pub mod prompts;
pub mod quote;
