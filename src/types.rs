//! Derived values produced by the FitFlow helpers
//!
//! Each helper consumes records from `schema` and returns one of these small,
//! serializable summaries.

use serde::{Deserialize, Serialize};

/// Daily nutrition totals summed across meals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

/// Energy contributed by each macronutrient (kcal)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub total_calories: f64,
}

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieTargets {
    /// Energy target (kcal)
    pub calories: i64,
    /// Protein target (g)
    pub protein: i64,
    /// Carbohydrate target (g)
    pub carbs: i64,
    /// Fat target (g)
    pub fat: i64,
}

/// Progress of the day's intake toward each target (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Short summary shown on a meal card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealSummary {
    /// Number of foods in the meal
    pub items: usize,
    pub calories: f64,
}

/// Averages over a set of daily logs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub avg_water: f64,
    pub avg_sleep: f64,
    pub avg_steps: f64,
}

/// One labelled point of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Label such as "Day 1"
    pub date: String,
    pub value: f64,
}

/// One labelled body weight point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    pub date: String,
    /// Weight (kg), one decimal place
    pub weight: f64,
}

/// Workout completion for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionPoint {
    /// Short weekday label, e.g. "Mon"
    pub date: String,
    /// Exercises logged as done
    pub completed: usize,
    /// Exercises the plan schedules for that weekday
    pub expected: usize,
    /// completed / expected as a rounded percentage, 0 when nothing is expected
    pub percentage: u32,
}

/// Progress of today's quick trackers toward their targets (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerProgress {
    pub water: f64,
    pub sleep: f64,
    pub steps: f64,
}
