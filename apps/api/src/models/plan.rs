use serde::{Deserialize, Serialize};

/// A generated diet-and-workout plan, shaped the way the plan view renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessPlan {
    pub overview: PlanOverview,
    pub workout_plan: WeeklyWorkout,
    pub diet_plan: DietPlan,
    pub tips: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOverview {
    pub name: String,
    pub age: u32,
    pub height: f64,
    pub weight: f64,
    pub goal: String,
    pub level: String,
    /// Formatted with one decimal, e.g. `"22.0"`.
    pub bmi: String,
    /// Range in kcal, e.g. `"1800-2000"`.
    pub calorie_target: String,
    pub summary: String,
}

/// Seven training days. Field order is the serialization order, Monday first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyWorkout {
    pub monday: WorkoutDay,
    pub tuesday: WorkoutDay,
    pub wednesday: WorkoutDay,
    pub thursday: WorkoutDay,
    pub friday: WorkoutDay,
    pub saturday: WorkoutDay,
    pub sunday: WorkoutDay,
}

impl WeeklyWorkout {
    /// Days paired with their lowercase names, in week order.
    pub fn days(&self) -> [(&'static str, &WorkoutDay); 7] {
        [
            ("monday", &self.monday),
            ("tuesday", &self.tuesday),
            ("wednesday", &self.wednesday),
            ("thursday", &self.thursday),
            ("friday", &self.friday),
            ("saturday", &self.saturday),
            ("sunday", &self.sunday),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub focus: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub rest: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub breakfast: Meal,
    pub mid_morning_snack: Meal,
    pub lunch: Meal,
    pub afternoon_snack: Meal,
    pub dinner: Meal,
    pub evening_snack: Meal,
    pub hydration: String,
    pub supplements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub items: Vec<String>,
    pub calories: String,
    pub protein: String,
}
