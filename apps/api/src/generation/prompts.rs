// Prompt constants for the AI-backed features.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for AI plan generation. `{json_only}` is replaced at build time.
pub const PLAN_SYSTEM: &str =
    "You are an expert AI fitness coach and nutritionist. {json_only}";

/// Plan prompt template.
/// Replace: {profile_lines}, {safety_instruction}
pub const PLAN_PROMPT_TEMPLATE: &str = r#"You are an expert fitness coach and nutritionist. Create a comprehensive, personalized fitness and diet plan based on the following user information:

{profile_lines}

{safety_instruction}

Provide a structured JSON with:
{
  "motivationalMessage": "",
  "workoutPlan": {
    "overview": "",
    "weeklySchedule": [
      {
        "day": "Monday",
        "focus": "",
        "exercises": [{"name": "", "sets": 3, "reps": "10-12", "rest": "60s"}]
      }
    ],
    "tips": []
  },
  "dietPlan": {
    "overview": "",
    "dailyCalories": 0,
    "macros": {"protein": "", "carbs": "", "fats": ""},
    "meals": [{"name": "", "items": [], "calories": "", "protein": ""}],
    "hydration": "",
    "supplements": []
  },
  "lifestyleTips": [],
  "progressTracking": {}
}"#;

pub const QUOTE_SYSTEM: &str = "You are a motivational fitness coach. \
    Generate a short inspiring quote about health and personal growth.";

pub const QUOTE_PROMPT: &str = "Give me a motivational quote for today.";

/// Replace: {name}
pub const EXERCISE_IMAGE_PROMPT: &str = "High-quality, realistic image of a person performing {name} \
    in a gym setting. Proper form, professional lighting.";

/// Replace: {name}
pub const MEAL_IMAGE_PROMPT: &str = "Professional, appetizing photograph of {name}. \
    Bright lighting, clean background, vibrant presentation.";
