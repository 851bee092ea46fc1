//! FitFlow - Fitness-tracking helpers
//!
//! FitFlow provides the data and arithmetic behind a fitness-tracking app:
//! meal aggregation → macro breakdown → calorie targets, plus wellness logs,
//! workout completion, community posts and sample panel data.
//!
//! ## Modules
//!
//! - **Nutrition**: daily totals, macro energy breakdown, calorie/protein targets
//! - **Wellness**: daily logs, averages, chart series, tracker progress
//! - **Workouts**: day filtering and weekly completion rates
//! - **Catalog**: helper listing and the canned demo used by the CLI

pub mod catalog;
pub mod community;
pub mod error;
pub mod foods;
pub mod insights;
pub mod nutrition;
pub mod onboarding;
pub mod schema;
pub mod shell;
pub mod types;
pub mod wellness;
pub mod workouts;

pub use error::FitflowError;
pub use nutrition::{
    compute_daily_totals, compute_targets, macro_breakdown, macro_progress, TargetPolicy,
};

// Schema exports
pub use schema::{
    CommunityPost, DailyLog, FitnessGoal, FoodItem, MealRecord, MealType, UserProfile,
    WorkoutPlan,
};

// Derived value exports
pub use types::{CalorieTargets, MacroBreakdown, MacroProgress, NutritionTotals};

/// FitFlow version
pub const FITFLOW_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name shown by the CLI
pub const APP_NAME: &str = "fitflow";
