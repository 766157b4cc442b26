//! Hand-authored plan templates: the fixed weekly workout and the meal tables.
//!
//! Everything here is `'static` data. `planner::selector` picks from it and
//! converts the picked rows into owned `models::plan` values.

use crate::models::plan::{Exercise, Meal, WorkoutDay};
use crate::models::profile::DietaryPreference;

pub struct ExerciseTemplate {
    pub name: &'static str,
    pub sets: u32,
    pub reps: &'static str,
    pub rest: &'static str,
}

pub struct DayTemplate {
    pub focus: &'static str,
    pub exercises: &'static [ExerciseTemplate],
}

pub struct MealTemplate {
    pub name: &'static str,
    pub items: &'static [&'static str],
    pub calories: &'static str,
    pub protein: &'static str,
}

impl DayTemplate {
    pub fn to_day(&self) -> WorkoutDay {
        WorkoutDay {
            focus: self.focus.to_string(),
            exercises: self
                .exercises
                .iter()
                .map(|e| Exercise {
                    name: e.name.to_string(),
                    sets: e.sets,
                    reps: e.reps.to_string(),
                    rest: e.rest.to_string(),
                })
                .collect(),
        }
    }
}

impl MealTemplate {
    pub fn to_meal(&self) -> Meal {
        Meal {
            name: self.name.to_string(),
            items: self.items.iter().map(|s| s.to_string()).collect(),
            calories: self.calories.to_string(),
            protein: self.protein.to_string(),
        }
    }
}

const fn ex(
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest: &'static str,
) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        sets,
        reps,
        rest,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Weekly workout
// ────────────────────────────────────────────────────────────────────────────

/// Monday through Sunday.
pub const WEEKLY_WORKOUT: [DayTemplate; 7] = [
    DayTemplate {
        focus: "Upper Body - Chest & Triceps",
        exercises: &[
            ex("Bench Press", 4, "8-10", "90s"),
            ex("Incline Dumbbell Press", 3, "10-12", "60s"),
            ex("Tricep Dips", 3, "12-15", "60s"),
            ex("Cable Flyes", 3, "12-15", "60s"),
            ex("Tricep Pushdowns", 3, "15-20", "45s"),
        ],
    },
    DayTemplate {
        focus: "Lower Body - Legs & Glutes",
        exercises: &[
            ex("Squats", 4, "10-12", "90s"),
            ex("Romanian Deadlifts", 4, "10-12", "90s"),
            ex("Leg Press", 3, "12-15", "60s"),
            ex("Walking Lunges", 3, "12 per leg", "60s"),
            ex("Calf Raises", 4, "15-20", "45s"),
        ],
    },
    DayTemplate {
        focus: "Cardio & Core",
        exercises: &[
            ex("Running/Cycling", 1, "30 minutes", "-"),
            ex("Plank", 3, "60 seconds", "60s"),
            ex("Russian Twists", 3, "20 per side", "45s"),
            ex("Leg Raises", 3, "15-20", "45s"),
            ex("Mountain Climbers", 3, "30 seconds", "45s"),
        ],
    },
    DayTemplate {
        focus: "Upper Body - Back & Biceps",
        exercises: &[
            ex("Pull-ups", 4, "8-10", "90s"),
            ex("Barbell Rows", 4, "8-10", "90s"),
            ex("Lat Pulldowns", 3, "12-15", "60s"),
            ex("Dumbbell Curls", 3, "12-15", "60s"),
            ex("Hammer Curls", 3, "12-15", "45s"),
        ],
    },
    DayTemplate {
        focus: "Shoulders & Abs",
        exercises: &[
            ex("Military Press", 4, "8-10", "90s"),
            ex("Lateral Raises", 3, "12-15", "60s"),
            ex("Front Raises", 3, "12-15", "60s"),
            ex("Face Pulls", 3, "15-20", "45s"),
            ex("Cable Crunches", 4, "15-20", "45s"),
        ],
    },
    DayTemplate {
        focus: "HIIT / Active Recovery",
        exercises: &[
            ex("HIIT Cardio", 1, "20 minutes", "-"),
            ex("Burpees", 3, "15", "60s"),
            ex("Jump Squats", 3, "15", "60s"),
            ex("Stretching", 1, "15 minutes", "-"),
        ],
    },
    DayTemplate {
        focus: "Rest Day",
        exercises: &[
            ex("Light Walking", 1, "20-30 minutes", "-"),
            ex("Mobility Work", 1, "15 minutes", "-"),
            ex("Foam Rolling", 1, "10 minutes", "-"),
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Meals
// ────────────────────────────────────────────────────────────────────────────

/// Meal slot keys in the lookup table. Both daytime snacks share `Snack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealKind {
    Breakfast,
    Snack,
    Lunch,
    Dinner,
    Evening,
}

/// Diets that have their own meal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietTable {
    Vegetarian,
    Vegan,
    NonVegetarian,
}

impl From<DietaryPreference> for DietTable {
    /// Keto and paleo have no table of their own and use the non-vegetarian one.
    fn from(pref: DietaryPreference) -> Self {
        match pref {
            DietaryPreference::Vegetarian => DietTable::Vegetarian,
            DietaryPreference::Vegan => DietTable::Vegan,
            DietaryPreference::NonVegetarian
            | DietaryPreference::Keto
            | DietaryPreference::Paleo => DietTable::NonVegetarian,
        }
    }
}

pub fn meal_template(kind: MealKind, diet: DietTable) -> &'static MealTemplate {
    use DietTable::*;
    use MealKind::*;

    match (kind, diet) {
        (Breakfast, Vegetarian) => &MealTemplate {
            name: "Veggie Power Breakfast",
            items: &[
                "Oatmeal with berries and nuts",
                "Scrambled eggs (2 whole)",
                "Greek yogurt",
                "Green tea",
            ],
            calories: "450-500",
            protein: "25g",
        },
        (Breakfast, Vegan) => &MealTemplate {
            name: "Plant Power Morning",
            items: &[
                "Smoothie bowl with plant protein",
                "Banana and chia seeds",
                "Almond butter toast",
                "Green tea",
            ],
            calories: "450-500",
            protein: "20g",
        },
        (Breakfast, NonVegetarian) => &MealTemplate {
            name: "Protein Packed Breakfast",
            items: &[
                "Scrambled eggs (3 eggs)",
                "Whole grain toast",
                "Turkey bacon",
                "Fruit salad",
                "Coffee",
            ],
            calories: "500-550",
            protein: "30g",
        },
        (Lunch, Vegetarian) => &MealTemplate {
            name: "Veggie Bowl",
            items: &[
                "Quinoa bowl with chickpeas",
                "Mixed vegetables",
                "Tahini dressing",
                "Side salad",
            ],
            calories: "600-650",
            protein: "25g",
        },
        (Lunch, Vegan) => &MealTemplate {
            name: "Plant-Based Power Bowl",
            items: &[
                "Lentil curry with brown rice",
                "Steamed vegetables",
                "Mixed nuts",
                "Green salad",
            ],
            calories: "600-650",
            protein: "22g",
        },
        (Lunch, NonVegetarian) => &MealTemplate {
            name: "Lean Protein Lunch",
            items: &[
                "Grilled chicken breast (200g)",
                "Sweet potato",
                "Broccoli and carrots",
                "Mixed greens",
            ],
            calories: "650-700",
            protein: "40g",
        },
        (Dinner, Vegetarian) => &MealTemplate {
            name: "Balanced Veggie Dinner",
            items: &["Paneer tikka", "Quinoa", "Roasted vegetables", "Cucumber salad"],
            calories: "550-600",
            protein: "28g",
        },
        (Dinner, Vegan) => &MealTemplate {
            name: "Plant-Based Dinner",
            items: &["Tofu stir-fry", "Brown rice", "Mixed vegetables", "Side salad"],
            calories: "550-600",
            protein: "25g",
        },
        (Dinner, NonVegetarian) => &MealTemplate {
            name: "Protein Rich Dinner",
            items: &[
                "Grilled salmon (180g)",
                "Quinoa",
                "Asparagus",
                "Mixed vegetables",
            ],
            calories: "600-650",
            protein: "45g",
        },
        (Snack, Vegetarian) => &MealTemplate {
            name: "Healthy Snack",
            items: &["Mixed nuts", "Apple", "Protein shake"],
            calories: "200-250",
            protein: "15g",
        },
        (Snack, Vegan) => &MealTemplate {
            name: "Plant Snack",
            items: &["Almonds", "Banana", "Plant protein shake"],
            calories: "200-250",
            protein: "12g",
        },
        (Snack, NonVegetarian) => &MealTemplate {
            name: "Protein Snack",
            items: &["Greek yogurt", "Berries", "Protein bar"],
            calories: "200-250",
            protein: "20g",
        },
        (Evening, Vegetarian) => &MealTemplate {
            name: "Light Evening",
            items: &["Cottage cheese", "Berries"],
            calories: "150-200",
            protein: "12g",
        },
        (Evening, Vegan) => &MealTemplate {
            name: "Plant Evening",
            items: &["Protein shake", "Handful of nuts"],
            calories: "150-200",
            protein: "10g",
        },
        (Evening, NonVegetarian) => &MealTemplate {
            name: "Casein Shake",
            items: &["Casein protein shake", "Almonds"],
            calories: "200-250",
            protein: "25g",
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed text
// ────────────────────────────────────────────────────────────────────────────

pub const HYDRATION: &str = "Drink 3-4 liters of water daily. Increase during workouts.";

pub const SUPPLEMENTS: &[&str] = &[
    "Whey Protein (post-workout)",
    "Multivitamin (morning)",
    "Omega-3 Fish Oil (with meals)",
    "Creatine Monohydrate (5g daily)",
];

pub const STRESS_TIP: &str = "Practice stress management techniques like meditation";
pub const CONSISTENCY_TIP: &str = "Stay consistent with your routine";

/// Tips before and after the stress-dependent slot (index 4).
pub const TIPS_BEFORE: &[&str] = &[
    "Get 7-8 hours of quality sleep every night",
    "Stretch for 10-15 minutes after each workout",
    "Progressive overload: gradually increase weights",
    "Track your workouts and progress weekly",
];
pub const TIPS_AFTER: &[&str] = &[
    "Listen to your body and take extra rest if needed",
    "Meal prep on weekends to stay on track",
    "Take progress photos every 2 weeks",
];

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [MealKind; 5] = [
        MealKind::Breakfast,
        MealKind::Snack,
        MealKind::Lunch,
        MealKind::Dinner,
        MealKind::Evening,
    ];
    const DIETS: [DietTable; 3] = [
        DietTable::Vegetarian,
        DietTable::Vegan,
        DietTable::NonVegetarian,
    ];

    #[test]
    fn test_every_meal_cell_is_filled() {
        for kind in KINDS {
            for diet in DIETS {
                let meal = meal_template(kind, diet);
                assert!(!meal.name.is_empty(), "{kind:?}/{diet:?} has no name");
                assert!(!meal.items.is_empty(), "{kind:?}/{diet:?} has no items");
                assert!(meal.protein.ends_with('g'));
            }
        }
    }

    #[test]
    fn test_keto_and_paleo_use_non_vegetarian_table() {
        assert_eq!(DietTable::from(DietaryPreference::Keto), DietTable::NonVegetarian);
        assert_eq!(DietTable::from(DietaryPreference::Paleo), DietTable::NonVegetarian);
        assert_eq!(DietTable::from(DietaryPreference::Vegan), DietTable::Vegan);
    }

    #[test]
    fn test_week_starts_with_chest_and_ends_with_rest() {
        assert_eq!(WEEKLY_WORKOUT[0].focus, "Upper Body - Chest & Triceps");
        assert_eq!(WEEKLY_WORKOUT[6].focus, "Rest Day");
        assert_eq!(WEEKLY_WORKOUT[5].exercises.len(), 4);
    }

    #[test]
    fn test_tip_slots_add_up_to_eight() {
        assert_eq!(TIPS_BEFORE.len() + 1 + TIPS_AFTER.len(), 8);
    }
}
