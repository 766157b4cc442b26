//! User profile: the form-submitted biometric and preference payload.
//!
//! `ProfileInput` is the raw, loosely-typed request body. `UserProfile` is what
//! the rest of the service works with; the only way to get one from the wire is
//! `ProfileInput::validate`.

use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Maintain,
    Endurance,
    Flexibility,
}

impl FitnessGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Maintain => "maintain",
            FitnessGoal::Endurance => "endurance",
            FitnessGoal::Flexibility => "flexibility",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutLocation {
    Home,
    Gym,
    Outdoor,
    Mixed,
}

impl WorkoutLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutLocation::Home => "home",
            WorkoutLocation::Gym => "gym",
            WorkoutLocation::Outdoor => "outdoor",
            WorkoutLocation::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    Vegetarian,
    NonVegetarian,
    Vegan,
    Keto,
    Paleo,
}

impl DietaryPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::NonVegetarian => "non_vegetarian",
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::Keto => "keto",
            DietaryPreference::Paleo => "paleo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
        }
    }
}

macro_rules! display_as_wire_value {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_wire_value!(
    Gender,
    FitnessGoal,
    FitnessLevel,
    WorkoutLocation,
    DietaryPreference,
    StressLevel
);

/// A validated user profile. Height is in centimetres, weight in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub fitness_goal: FitnessGoal,
    pub fitness_level: FitnessLevel,
    pub workout_location: WorkoutLocation,
    pub dietary_preference: DietaryPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<StressLevel>,
}

/// Raw profile as submitted by the form. Numbers may arrive as JSON numbers or
/// numeric strings; anything may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub name: Option<String>,
    pub age: Option<Value>,
    pub gender: Option<String>,
    pub height: Option<Value>,
    pub weight: Option<Value>,
    pub fitness_goal: Option<String>,
    pub fitness_level: Option<String>,
    pub workout_location: Option<String>,
    pub dietary_preference: Option<String>,
    pub medical_history: Option<String>,
    pub stress_level: Option<String>,
}

/// Numeric field state after reading it off the wire.
enum Numeric {
    Missing,
    Invalid(String),
    Present(f64),
}

fn read_numeric(raw: &Option<Value>) -> Numeric {
    match raw {
        None | Some(Value::Null) => Numeric::Missing,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v == 0.0 => Numeric::Missing,
            Some(v) => Numeric::Present(v),
            None => Numeric::Invalid(n.to_string()),
        },
        Some(Value::String(s)) if s.trim().is_empty() => Numeric::Missing,
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if v == 0.0 => Numeric::Missing,
            Ok(v) if v.is_finite() => Numeric::Present(v),
            _ => Numeric::Invalid(s.clone()),
        },
        Some(other) => Numeric::Invalid(other.to_string()),
    }
}

fn non_blank(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Parses a categorical wire value (e.g. `"weight_loss"`) into its enum.
fn parse_choice<T: DeserializeOwned>(field: &str, raw: &str) -> Result<T, AppError> {
    serde_json::from_value(Value::String(raw.to_string()))
        .map_err(|_| AppError::Validation(format!("Invalid value for {field}: '{raw}'")))
}

fn positive(field: &str, value: f64) -> Result<f64, AppError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::Validation(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

impl ProfileInput {
    /// Names of required fields that are absent, null, blank, or zero, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let numeric_missing = |raw: &Option<Value>| matches!(read_numeric(raw), Numeric::Missing);

        let checks: [(&'static str, bool); 9] = [
            ("name", non_blank(&self.name).is_none()),
            ("age", numeric_missing(&self.age)),
            ("height", numeric_missing(&self.height)),
            ("weight", numeric_missing(&self.weight)),
            ("gender", non_blank(&self.gender).is_none()),
            ("fitnessGoal", non_blank(&self.fitness_goal).is_none()),
            ("fitnessLevel", non_blank(&self.fitness_level).is_none()),
            ("workoutLocation", non_blank(&self.workout_location).is_none()),
            ("dietaryPreference", non_blank(&self.dietary_preference).is_none()),
        ];

        checks
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(field, _)| field)
            .collect()
    }

    /// Validates the raw input and produces a typed `UserProfile`.
    ///
    /// All missing required fields are reported together; after that the first
    /// malformed value wins.
    pub fn validate(&self) -> Result<UserProfile, AppError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let age = positive("age", self.number("age", &self.age)?)?;
        if age.fract() != 0.0 || age > u32::MAX as f64 {
            return Err(AppError::Validation(format!(
                "age must be a whole number of years, got {age}"
            )));
        }

        Ok(UserProfile {
            name: self.text(&self.name),
            age: age as u32,
            gender: parse_choice("gender", &self.text(&self.gender))?,
            height: positive("height", self.number("height", &self.height)?)?,
            weight: positive("weight", self.number("weight", &self.weight)?)?,
            fitness_goal: parse_choice("fitnessGoal", &self.text(&self.fitness_goal))?,
            fitness_level: parse_choice("fitnessLevel", &self.text(&self.fitness_level))?,
            workout_location: parse_choice(
                "workoutLocation",
                &self.text(&self.workout_location),
            )?,
            dietary_preference: parse_choice(
                "dietaryPreference",
                &self.text(&self.dietary_preference),
            )?,
            medical_history: non_blank(&self.medical_history).map(str::to_string),
            stress_level: non_blank(&self.stress_level)
                .map(|s| parse_choice("stressLevel", s))
                .transpose()?,
        })
    }

    fn text(&self, raw: &Option<String>) -> String {
        non_blank(raw).unwrap_or_default().to_string()
    }

    fn number(&self, field: &str, raw: &Option<Value>) -> Result<f64, AppError> {
        match read_numeric(raw) {
            Numeric::Present(v) => Ok(v),
            Numeric::Invalid(shown) => Err(AppError::Validation(format!(
                "Invalid value for {field}: '{shown}'"
            ))),
            // missing_fields() already ran
            Numeric::Missing => Err(AppError::Validation(format!(
                "Missing required fields: {field}"
            ))),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn sample_input() -> Value {
        json!({
            "name": "Asha",
            "age": 29,
            "gender": "female",
            "height": 165,
            "weight": 60,
            "fitnessGoal": "weight_loss",
            "fitnessLevel": "beginner",
            "workoutLocation": "home",
            "dietaryPreference": "vegetarian",
            "medicalHistory": "",
            "stressLevel": "high"
        })
    }

    pub(crate) fn sample_profile() -> UserProfile {
        let input: ProfileInput = serde_json::from_value(sample_input()).unwrap();
        input.validate().unwrap()
    }

    fn validation_message(input: Value) -> String {
        let input: ProfileInput = serde_json::from_value(input).unwrap();
        match input.validate() {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_profile_parses_all_fields() {
        let profile = sample_profile();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.age, 29);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.fitness_goal, FitnessGoal::WeightLoss);
        assert_eq!(profile.dietary_preference, DietaryPreference::Vegetarian);
        assert_eq!(profile.stress_level, Some(StressLevel::High));
        assert!(profile.medical_history.is_none(), "blank medical history is dropped");
    }

    #[test]
    fn test_missing_fields_reported_together_in_form_order() {
        let msg = validation_message(json!({
            "name": "Asha",
            "age": 29,
            "gender": "female",
            "height": 165,
            "fitnessLevel": "beginner"
        }));
        assert_eq!(
            msg,
            "Missing required fields: weight, fitnessGoal, workoutLocation, dietaryPreference"
        );
    }

    #[test]
    fn test_zero_and_blank_count_as_missing() {
        let mut input = sample_input();
        input["age"] = json!(0);
        input["name"] = json!("   ");
        input["height"] = json!(null);
        let msg = validation_message(input);
        assert_eq!(msg, "Missing required fields: name, age, height");
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let mut input = sample_input();
        input["height"] = json!("172.5");
        input["age"] = json!("41");
        let input: ProfileInput = serde_json::from_value(input).unwrap();
        let profile = input.validate().unwrap();
        assert_eq!(profile.age, 41);
        assert!((profile.height - 172.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_goal_rejected() {
        let mut input = sample_input();
        input["fitnessGoal"] = json!("bulk_forever");
        let msg = validation_message(input);
        assert_eq!(msg, "Invalid value for fitnessGoal: 'bulk_forever'");
    }

    #[test]
    fn test_non_numeric_weight_rejected() {
        let mut input = sample_input();
        input["weight"] = json!("heavy");
        let msg = validation_message(input);
        assert!(msg.contains("weight"), "got {msg}");
    }

    #[test]
    fn test_negative_height_rejected() {
        let mut input = sample_input();
        input["height"] = json!(-170);
        let msg = validation_message(input);
        assert!(msg.contains("height must be a positive number"), "got {msg}");
    }

    #[test]
    fn test_fractional_age_rejected() {
        let mut input = sample_input();
        input["age"] = json!(29.5);
        let msg = validation_message(input);
        assert!(msg.contains("whole number"), "got {msg}");
    }

    #[test]
    fn test_profile_serializes_wire_values() {
        let value = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(value["fitnessGoal"], "weight_loss");
        assert_eq!(value["dietaryPreference"], "vegetarian");
        assert!(value.get("medicalHistory").is_none());
    }

    #[test]
    fn test_display_matches_wire_value() {
        assert_eq!(DietaryPreference::NonVegetarian.to_string(), "non_vegetarian");
        assert_eq!(WorkoutLocation::Outdoor.to_string(), "outdoor");
    }
}
