//! AI plan, the alternative to the template planner: one chat call that returns
//! a free-form JSON plan.
//!
//! The provider's output is untrusted. Parsing is lenient (every field defaults,
//! numbers may come back as strings, the weekly schedule may be a list or a
//! day-keyed object) and `AiFitnessPlan::normalize` fills whatever is still blank.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{PLAN_PROMPT_TEMPLATE, PLAN_SYSTEM};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, SAFETY_INSTRUCTION};
use crate::llm_client::{strip_json_fences, AiProvider, ChatRequest, LlmError};
use crate::models::profile::UserProfile;
use crate::planner::selector::calorie_target;
use crate::planner::templates::HYDRATION;

const PLAN_TEMPERATURE: f32 = 0.7;
/// Calorie figures outside this band are treated as hallucinated.
const MIN_DAILY_CALORIES: u32 = 1000;
const MAX_DAILY_CALORIES: u32 = 6000;

pub const DEFAULT_MOTIVATION: &str = "Every workout is progress. Keep pushing forward!";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiFitnessPlan {
    #[serde(deserialize_with = "lenient::string")]
    pub motivational_message: String,
    pub workout_plan: AiWorkoutPlan,
    pub diet_plan: AiDietPlan,
    #[serde(deserialize_with = "lenient::strings")]
    pub lifestyle_tips: Vec<String>,
    #[serde(deserialize_with = "lenient::object")]
    pub progress_tracking: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiWorkoutPlan {
    #[serde(deserialize_with = "lenient::string")]
    pub overview: String,
    #[serde(deserialize_with = "lenient::schedule")]
    pub weekly_schedule: Vec<AiWorkoutDay>,
    #[serde(deserialize_with = "lenient::strings")]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiWorkoutDay {
    #[serde(deserialize_with = "lenient::string")]
    pub day: String,
    #[serde(deserialize_with = "lenient::string")]
    pub focus: String,
    #[serde(deserialize_with = "lenient::items")]
    pub exercises: Vec<AiExercise>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiExercise {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub sets: u32,
    #[serde(deserialize_with = "lenient::string")]
    pub reps: String,
    #[serde(deserialize_with = "lenient::string")]
    pub rest: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiDietPlan {
    #[serde(deserialize_with = "lenient::string")]
    pub overview: String,
    #[serde(deserialize_with = "lenient::number")]
    pub daily_calories: u32,
    #[serde(deserialize_with = "lenient::object")]
    pub macros: Map<String, Value>,
    #[serde(deserialize_with = "lenient::items")]
    pub meals: Vec<AiMeal>,
    #[serde(deserialize_with = "lenient::string")]
    pub hydration: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub supplements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiMeal {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub items: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub calories: String,
    #[serde(deserialize_with = "lenient::string")]
    pub protein: String,
}

impl AiFitnessPlan {
    /// Fills blanks and discards rows the provider left empty.
    pub fn normalize(mut self, profile: &UserProfile) -> Self {
        if self.motivational_message.trim().is_empty() {
            self.motivational_message = DEFAULT_MOTIVATION.to_string();
        }

        let workout = &mut self.workout_plan;
        if workout.overview.trim().is_empty() {
            workout.overview = format!(
                "A {} plan built around your {} goal, for {} workouts.",
                profile.fitness_level, profile.fitness_goal, profile.workout_location
            );
        }
        for day in &mut workout.weekly_schedule {
            day.exercises.retain(|e| !e.name.trim().is_empty());
        }
        workout
            .weekly_schedule
            .retain(|d| !d.day.trim().is_empty() || !d.exercises.is_empty());

        let diet = &mut self.diet_plan;
        if !(MIN_DAILY_CALORIES..=MAX_DAILY_CALORIES).contains(&diet.daily_calories) {
            let fallback = calorie_target(profile.fitness_goal).midpoint();
            if diet.daily_calories != 0 {
                warn!(
                    "AI plan dailyCalories={} out of range, using {}",
                    diet.daily_calories, fallback
                );
            }
            diet.daily_calories = fallback;
        }
        diet.meals.retain(|m| !m.name.trim().is_empty());
        if diet.hydration.trim().is_empty() {
            diet.hydration = HYDRATION.to_string();
        }

        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Asks the provider for a plan, then validates and defaults the result.
pub async fn generate_ai_plan(
    profile: &UserProfile,
    provider: &dyn AiProvider,
) -> Result<AiFitnessPlan, AppError> {
    let system = PLAN_SYSTEM.replace("{json_only}", JSON_ONLY_INSTRUCTION);
    let prompt = build_plan_prompt(profile);

    let text = provider
        .chat(ChatRequest {
            system: &system,
            prompt: &prompt,
            temperature: PLAN_TEMPERATURE,
            max_tokens: None,
            json_mode: true,
        })
        .await?;

    if text.trim().is_empty() {
        return Err(LlmError::EmptyContent.into());
    }

    let plan = parse_ai_plan(&text)?.normalize(profile);
    info!(
        "AI plan generated for {}: {} workout days, {} meals",
        profile.name,
        plan.workout_plan.weekly_schedule.len(),
        plan.diet_plan.meals.len()
    );
    Ok(plan)
}

/// The reply must be a JSON object. Serde would otherwise read an array as a
/// positional struct.
pub fn parse_ai_plan(text: &str) -> Result<AiFitnessPlan, AppError> {
    let invalid = |e: serde_json::Error| {
        AppError::Llm(format!("AI plan was not a valid JSON object: {e}"))
    };

    match serde_json::from_str::<Value>(strip_json_fences(text)).map_err(invalid)? {
        object @ Value::Object(_) => serde_json::from_value(object).map_err(invalid),
        other => Err(AppError::Llm(format!(
            "AI plan was not a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Lists every profile field; optional ones only when present.
pub fn build_plan_prompt(profile: &UserProfile) -> String {
    let mut lines = vec![
        format!("Name: {}", profile.name),
        format!("Age: {}", profile.age),
        format!("Gender: {}", profile.gender),
        format!("Height: {} cm", profile.height),
        format!("Weight: {} kg", profile.weight),
        format!("Fitness Goal: {}", profile.fitness_goal),
        format!("Current Fitness Level: {}", profile.fitness_level),
        format!("Workout Location: {}", profile.workout_location),
        format!("Dietary Preference: {}", profile.dietary_preference),
    ];
    if let Some(medical) = &profile.medical_history {
        lines.push(format!("Medical History: {medical}"));
    }
    if let Some(stress) = profile.stress_level {
        lines.push(format!("Stress Level: {stress}"));
    }

    PLAN_PROMPT_TEMPLATE
        .replace("{profile_lines}", &lines.join("\n"))
        .replace("{safety_instruction}", SAFETY_INSTRUCTION)
}

/// Deserializers that accept whatever shape the provider produced.
mod lenient {
    use super::*;
    use serde::de::DeserializeOwned;

    fn stringify(value: Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(stringify(Value::deserialize(d)?))
    }

    pub fn strings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(values) => values
                .into_iter()
                .map(stringify)
                .filter(|s| !s.trim().is_empty())
                .collect(),
            Value::String(s) if !s.trim().is_empty() => vec![s],
            _ => Vec::new(),
        })
    }

    /// Whole numbers from numbers or strings like `"2100 kcal"`. Anything else is 0.
    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n
                .as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v.round().min(u32::MAX as f64) as u32)
                .unwrap_or(0),
            Value::String(s) => {
                let digits: String = s
                    .trim_start()
                    .chars()
                    .filter(|c| *c != ',')
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                digits.parse().unwrap_or(0)
            }
            _ => 0,
        })
    }

    pub fn object<'de, D: Deserializer<'de>>(d: D) -> Result<Map<String, Value>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Object(map) => map,
            _ => Map::new(),
        })
    }

    /// A list of records; entries that don't fit the record shape are skipped.
    pub fn items<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(d)? {
            Value::Array(values) => values
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Either `[{day, focus, exercises}]` or `{"monday": {focus, exercises}}`.
    pub fn schedule<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<AiWorkoutDay>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(values) => values
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
            Value::Object(days) => days
                .into_iter()
                .filter_map(|(day, v)| {
                    let mut parsed: AiWorkoutDay = serde_json::from_value(v).ok()?;
                    if parsed.day.trim().is_empty() {
                        parsed.day = day;
                    }
                    Some(parsed)
                })
                .collect(),
            _ => Vec::new(),
        })
    }
}
