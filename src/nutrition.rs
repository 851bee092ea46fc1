//! Nutrition calculations
//!
//! This module derives daily nutrition figures from logged meals:
//! - Daily totals summed across meal records
//! - Macro energy breakdown using fixed per-gram constants
//! - Calorie and protein targets from body weight and fitness goal

use crate::schema::{FitnessGoal, MealRecord, UserProfile};
use crate::types::{CalorieTargets, MacroBreakdown, MacroProgress, MealSummary, NutritionTotals};
use crate::wellness::percent_of;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Energy per gram of protein (kcal)
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;

/// Energy per gram of carbohydrate (kcal)
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;

/// Energy per gram of fat (kcal)
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Body weight assumed when a profile has none (kg)
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Sum nutrition totals across meals.
///
/// Missing fields contribute 0; an empty slice yields all zeros.
pub fn compute_daily_totals(meals: &[MealRecord]) -> NutritionTotals {
    let totals = meals
        .iter()
        .fold(NutritionTotals::default(), |mut acc, meal| {
            acc.calories += meal.total_calories.unwrap_or(0.0);
            acc.protein += meal.total_protein.unwrap_or(0.0);
            acc.carbs += meal.total_carbs.unwrap_or(0.0);
            acc.fat += meal.total_fat.unwrap_or(0.0);
            acc
        });

    debug!(meals = meals.len(), calories = totals.calories, "computed daily totals");
    totals
}

/// Convert gram totals to energy contributions per macronutrient
pub fn macro_breakdown(totals: &NutritionTotals) -> MacroBreakdown {
    let protein = totals.protein * PROTEIN_KCAL_PER_GRAM;
    let carbs = totals.carbs * CARBS_KCAL_PER_GRAM;
    let fat = totals.fat * FAT_KCAL_PER_GRAM;

    MacroBreakdown {
        protein,
        carbs,
        fat,
        total_calories: protein + carbs + fat,
    }
}

/// Per-kilogram multipliers for a single goal branch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetMultipliers {
    /// kcal per kg of body weight
    pub calories_per_kg: f64,
    /// grams of protein per kg of body weight
    pub protein_per_kg: f64,
    /// Share of the calorie target taken by carbohydrates
    pub carbs_share: f64,
    /// Share of the calorie target taken by fat
    pub fat_share: f64,
}

/// Multiplier table used by the target calculator
///
/// Goals other than muscle gain and weight loss share the `fallback` branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPolicy {
    pub muscle_gain: TargetMultipliers,
    pub weight_loss: TargetMultipliers,
    pub fallback: TargetMultipliers,
}

impl Default for TargetPolicy {
    fn default() -> Self {
        Self {
            muscle_gain: TargetMultipliers {
                calories_per_kg: 35.0,
                protein_per_kg: 2.0,
                carbs_share: 0.45,
                fat_share: 0.25,
            },
            weight_loss: TargetMultipliers {
                calories_per_kg: 25.0,
                protein_per_kg: 1.8,
                carbs_share: 0.35,
                fat_share: 0.30,
            },
            fallback: TargetMultipliers {
                calories_per_kg: 30.0,
                protein_per_kg: 1.6,
                carbs_share: 0.45,
                fat_share: 0.25,
            },
        }
    }
}

impl TargetPolicy {
    /// Pick the multipliers for a goal
    pub fn multipliers_for(&self, goal: &FitnessGoal) -> TargetMultipliers {
        match goal {
            FitnessGoal::MuscleGain => self.muscle_gain,
            FitnessGoal::WeightLoss => self.weight_loss,
            other => {
                if matches!(other, FitnessGoal::Other(_)) {
                    debug!(goal = other.as_str(), "unrecognised goal, using fallback targets");
                }
                self.fallback
            }
        }
    }
}

/// Compute calorie and macronutrient targets with the default multipliers.
///
/// A missing weight counts as 70 kg and a missing goal as weight loss. Carb
/// and fat grams are split from the unrounded calorie target.
pub fn compute_targets(profile: &UserProfile) -> CalorieTargets {
    compute_targets_with(profile, &TargetPolicy::default())
}

/// Compute calorie and macronutrient targets with a custom multiplier table
pub fn compute_targets_with(profile: &UserProfile, policy: &TargetPolicy) -> CalorieTargets {
    let weight = profile.weight.unwrap_or(DEFAULT_WEIGHT_KG);
    let goal = profile
        .fitness_goal
        .clone()
        .unwrap_or(FitnessGoal::WeightLoss);

    let multipliers = policy.multipliers_for(&goal);

    let calories = weight * multipliers.calories_per_kg;

    CalorieTargets {
        calories: calories.round() as i64,
        protein: (weight * multipliers.protein_per_kg).round() as i64,
        carbs: (calories * multipliers.carbs_share / CARBS_KCAL_PER_GRAM).round() as i64,
        fat: (calories * multipliers.fat_share / FAT_KCAL_PER_GRAM).round() as i64,
    }
}

/// Progress of the day's totals toward the targets, each capped at 100.
///
/// Totals are rounded to whole units first; a zero target reads as 0.
pub fn macro_progress(totals: &NutritionTotals, targets: &CalorieTargets) -> MacroProgress {
    MacroProgress {
        calories: percent_of(totals.calories.round(), targets.calories as f64),
        protein: percent_of(totals.protein.round(), targets.protein as f64),
        carbs: percent_of(totals.carbs.round(), targets.carbs as f64),
        fat: percent_of(totals.fat.round(), targets.fat as f64),
    }
}

/// Summarise a meal for its card: food count and calories
pub fn meal_summary(meal: &MealRecord) -> MealSummary {
    MealSummary {
        items: meal.foods.len(),
        calories: meal.total_calories.unwrap_or(0.0),
    }
}
