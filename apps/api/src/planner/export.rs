//! Plain-text rendering of a plan, served as a downloadable `.txt` file.

use std::fmt;

use crate::models::plan::{FitnessPlan, Meal};

pub fn render_plan_text(plan: &FitnessPlan) -> String {
    PlanText(plan).to_string()
}

/// Text layout of the downloadable plan.
struct PlanText<'a>(&'a FitnessPlan);

impl fmt::Display for PlanText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let o = &plan.overview;

        writeln!(f, "FITNESS PLAN FOR {}", o.name)?;
        writeln!(f, "=====================================")?;
        writeln!(f)?;
        writeln!(f, "OVERVIEW")?;
        writeln!(f, "--------")?;
        writeln!(f, "Age: {}", o.age)?;
        writeln!(f, "Height: {}cm", o.height)?;
        writeln!(f, "Weight: {}kg", o.weight)?;
        writeln!(f, "BMI: {}", o.bmi)?;
        writeln!(f, "Goal: {}", o.goal)?;
        writeln!(f, "Level: {}", o.level)?;
        writeln!(f, "Daily Calories: {}", o.calorie_target)?;
        writeln!(f)?;
        writeln!(f, "{}", o.summary)?;
        writeln!(f)?;

        writeln!(f, "WORKOUT PLAN")?;
        writeln!(f, "------------")?;
        for (day, workout) in plan.workout_plan.days() {
            writeln!(f)?;
            writeln!(f, "{}", day.to_uppercase())?;
            writeln!(f, "{}", workout.focus)?;
            for ex in &workout.exercises {
                writeln!(
                    f,
                    "- {}: {} sets x {} reps (Rest: {})",
                    ex.name, ex.sets, ex.reps, ex.rest
                )?;
            }
        }
        writeln!(f)?;

        writeln!(f, "DIET PLAN")?;
        writeln!(f, "---------")?;
        write_meal(f, "Breakfast", &plan.diet_plan.breakfast)?;
        write_meal(f, "Lunch", &plan.diet_plan.lunch)?;
        write_meal(f, "Dinner", &plan.diet_plan.dinner)?;

        writeln!(f, "HYDRATION")?;
        writeln!(f, "{}", plan.diet_plan.hydration)?;
        writeln!(f)?;
        writeln!(f, "SUPPLEMENTS")?;
        for sup in &plan.diet_plan.supplements {
            writeln!(f, "- {sup}")?;
        }
        writeln!(f)?;

        writeln!(f, "TIPS")?;
        writeln!(f, "----")?;
        for (i, tip) in plan.tips.iter().enumerate() {
            writeln!(f, "{}. {tip}", i + 1)?;
        }
        writeln!(f)?;

        writeln!(f, "NOTES")?;
        writeln!(f, "-----")?;
        writeln!(f, "{}", plan.notes.trim_end())
    }
}

fn write_meal(f: &mut fmt::Formatter<'_>, label: &str, meal: &Meal) -> fmt::Result {
    writeln!(f, "{label}: {}", meal.name)?;
    for item in &meal.items {
        writeln!(f, "- {item}")?;
    }
    writeln!(f, "Calories: {} | Protein: {}", meal.calories, meal.protein)?;
    writeln!(f)
}

/// File name offered in `Content-Disposition`, e.g. `fitness-plan-asha.txt`.
pub fn export_file_name(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "fitness-plan.txt".to_string()
    } else {
        format!("fitness-plan-{slug}.txt")
    }
}
