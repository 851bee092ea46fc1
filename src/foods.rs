//! Food lookup
//!
//! A small built-in food table used by the add-meal dialog, with substring
//! search and a flat estimate for free-text descriptions.

use serde::Serialize;

/// A row in the built-in food table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodEntry {
    pub name: &'static str,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Protein per serving (g)
    pub protein: f64,
}

/// Built-in food table (read-only)
pub static FOOD_DATABASE: &[FoodEntry] = &[
    FoodEntry {
        name: "Chicken Breast",
        calories: 165.0,
        protein: 31.0,
    },
    FoodEntry {
        name: "Brown Rice",
        calories: 216.0,
        protein: 5.0,
    },
    FoodEntry {
        name: "Salmon",
        calories: 208.0,
        protein: 20.0,
    },
];

/// Characters of a description kept as the estimate's name
const ESTIMATE_NAME_CHARS: usize = 30;

/// Nutrition guessed from a free-text meal description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodEstimate {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
}

/// Case-insensitive substring search over the food table.
///
/// The query is trimmed first; an empty query matches every entry.
pub fn search_foods(query: &str) -> Vec<FoodEntry> {
    let needle = query.trim().to_lowercase();
    FOOD_DATABASE
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

/// Flat estimate for a described meal: 250 kcal, 15 g protein
pub fn estimate_from_description(description: &str) -> FoodEstimate {
    FoodEstimate {
        name: description.chars().take(ESTIMATE_NAME_CHARS).collect(),
        calories: 250.0,
        protein: 15.0,
    }
}
