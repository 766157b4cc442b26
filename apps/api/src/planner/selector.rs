//! Plan-template selector: turns a validated profile into a `FitnessPlan`.
//!
//! Pure and deterministic: the same profile always yields the same plan.
//! Goal picks the calorie range, diet picks the meal table, stress picks one tip.

use std::fmt;

use serde::Serialize;

use crate::models::plan::{DietPlan, FitnessPlan, PlanOverview, WeeklyWorkout};
use crate::models::profile::{FitnessGoal, StressLevel, UserProfile};
use crate::planner::templates::{
    meal_template, DietTable, MealKind, CONSISTENCY_TIP, HYDRATION, STRESS_TIP, SUPPLEMENTS,
    TIPS_AFTER, TIPS_BEFORE, WEEKLY_WORKOUT,
};

/// Daily calorie range in kcal. Displays as `min-max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalorieRange {
    pub min: u32,
    pub max: u32,
}

impl CalorieRange {
    pub fn midpoint(&self) -> u32 {
        (self.min + self.max) / 2
    }
}

impl fmt::Display for CalorieRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

pub fn calorie_target(goal: FitnessGoal) -> CalorieRange {
    match goal {
        FitnessGoal::WeightLoss => CalorieRange {
            min: 1800,
            max: 2000,
        },
        FitnessGoal::MuscleGain => CalorieRange {
            min: 2800,
            max: 3000,
        },
        FitnessGoal::Maintain | FitnessGoal::Endurance | FitnessGoal::Flexibility => {
            CalorieRange {
                min: 2200,
                max: 2400,
            }
        }
    }
}

/// Body-mass index from kilograms and centimetres.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

pub fn format_bmi(bmi: f64) -> String {
    format!("{bmi:.1}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Builds the full template plan for a profile.
pub fn generate_structured_plan(profile: &UserProfile) -> FitnessPlan {
    let goal = profile.fitness_goal.as_str();
    let level = profile.fitness_level.as_str();

    let overview = PlanOverview {
        name: profile.name.clone(),
        age: profile.age,
        height: profile.height,
        weight: profile.weight,
        goal: goal.to_string(),
        level: level.to_string(),
        bmi: format_bmi(calculate_bmi(profile.weight, profile.height)),
        calorie_target: calorie_target(profile.fitness_goal).to_string(),
        summary: format!(
            "This personalized plan is designed for your {level} fitness level to help you achieve your {goal} goal."
        ),
    };

    FitnessPlan {
        overview,
        workout_plan: weekly_workout(),
        diet_plan: diet_plan(DietTable::from(profile.dietary_preference)),
        tips: tips(profile.stress_level),
        notes: notes(profile),
    }
}

fn weekly_workout() -> WeeklyWorkout {
    let [mon, tue, wed, thu, fri, sat, sun] = &WEEKLY_WORKOUT;
    WeeklyWorkout {
        monday: mon.to_day(),
        tuesday: tue.to_day(),
        wednesday: wed.to_day(),
        thursday: thu.to_day(),
        friday: fri.to_day(),
        saturday: sat.to_day(),
        sunday: sun.to_day(),
    }
}

fn diet_plan(diet: DietTable) -> DietPlan {
    let meal = |kind| meal_template(kind, diet).to_meal();
    DietPlan {
        breakfast: meal(MealKind::Breakfast),
        mid_morning_snack: meal(MealKind::Snack),
        lunch: meal(MealKind::Lunch),
        afternoon_snack: meal(MealKind::Snack),
        dinner: meal(MealKind::Dinner),
        evening_snack: meal(MealKind::Evening),
        hydration: HYDRATION.to_string(),
        supplements: SUPPLEMENTS.iter().map(|s| s.to_string()).collect(),
    }
}

fn tips(stress: Option<StressLevel>) -> Vec<String> {
    let stress_slot = match stress {
        Some(StressLevel::High) => STRESS_TIP,
        _ => CONSISTENCY_TIP,
    };

    TIPS_BEFORE
        .iter()
        .chain(std::iter::once(&stress_slot))
        .chain(TIPS_AFTER.iter())
        .map(|s| s.to_string())
        .collect()
}

fn notes(profile: &UserProfile) -> String {
    let medical = profile
        .medical_history
        .as_deref()
        .map(|m| format!("Note: {m}"))
        .unwrap_or_default();
    format!(
        "This plan is customized for your {} workouts. {medical}",
        profile.workout_location.as_str()
    )
}
