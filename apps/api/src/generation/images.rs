//! Illustrative images for exercises and meals. Failures are logged and yield `None`.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::generation::prompts::{EXERCISE_IMAGE_PROMPT, MEAL_IMAGE_PROMPT};
use crate::llm_client::AiProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Exercise,
    Meal,
}

impl ImageKind {
    /// Parses the request's `type` field. Only `exercise` and `meal` are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "exercise" => Some(ImageKind::Exercise),
            "meal" => Some(ImageKind::Meal),
            _ => None,
        }
    }

    pub fn prompt_for(&self, name: &str) -> String {
        let template = match self {
            ImageKind::Exercise => EXERCISE_IMAGE_PROMPT,
            ImageKind::Meal => MEAL_IMAGE_PROMPT,
        };
        template.replace("{name}", name)
    }
}

pub async fn generate_image(
    kind: ImageKind,
    name: &str,
    provider: &dyn AiProvider,
) -> Option<String> {
    match provider.generate_image(&kind.prompt_for(name)).await {
        Ok(url) => url,
        Err(e) => {
            error!("Error generating {kind:?} image for '{name}': {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::test_utils::StubProvider;

    #[test]
    fn test_kind_parse() {
        assert_eq!(ImageKind::parse("exercise"), Some(ImageKind::Exercise));
        assert_eq!(ImageKind::parse("meal"), Some(ImageKind::Meal));
        assert_eq!(ImageKind::parse("Meal"), None);
        assert_eq!(ImageKind::parse("selfie"), None);
    }

    #[test]
    fn test_prompts_embed_name() {
        let p = ImageKind::Exercise.prompt_for("Bench Press");
        assert!(p.contains("performing Bench Press in a gym setting"));
        let p = ImageKind::Meal.prompt_for("Veggie Bowl");
        assert!(p.starts_with("Professional, appetizing photograph of Veggie Bowl."));
    }

    #[tokio::test]
    async fn test_generate_passes_prompt_and_returns_url() {
        let stub = StubProvider::replying("").with_image(Some("https://img.example/a.png"));
        let url = generate_image(ImageKind::Meal, "Tofu stir-fry", &stub).await;
        assert_eq!(url.as_deref(), Some("https://img.example/a.png"));
        assert!(stub.image_prompts()[0].contains("Tofu stir-fry"));
    }

    #[tokio::test]
    async fn test_generate_error_is_none() {
        let stub = StubProvider::failing(|| LlmError::EmptyContent);
        assert!(generate_image(ImageKind::Exercise, "Squats", &stub).await.is_none());
    }
}
