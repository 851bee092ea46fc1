//! FitFlow record definitions
//!
//! Transient records passed between the helpers:
//! - Meal records with per-meal nutrition totals
//! - Daily wellness logs (water, sleep, steps)
//! - User profiles gathered during onboarding
//! - Community posts and workout plans
//!
//! Numeric fields that the tracker treats as "zero when absent" use serde
//! defaults; nutrition totals stay optional so a missing value can be told
//! apart from an explicit zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fitness goal selected during onboarding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Flexibility,
    PostureImprovement,
    Endurance,
    /// Any goal string the app does not recognise, kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl FitnessGoal {
    /// Goals offered by the onboarding goal step, in display order
    pub const KNOWN: [FitnessGoal; 5] = [
        FitnessGoal::WeightLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Flexibility,
        FitnessGoal::PostureImprovement,
        FitnessGoal::Endurance,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Flexibility => "flexibility",
            FitnessGoal::PostureImprovement => "posture_improvement",
            FitnessGoal::Endurance => "endurance",
            FitnessGoal::Other(name) => name.as_str(),
        }
    }
}

impl From<&str> for FitnessGoal {
    fn from(value: &str) -> Self {
        match value {
            "weight_loss" => FitnessGoal::WeightLoss,
            "muscle_gain" => FitnessGoal::MuscleGain,
            "flexibility" => FitnessGoal::Flexibility,
            "posture_improvement" => FitnessGoal::PostureImprovement,
            "endurance" => FitnessGoal::Endurance,
            other => FitnessGoal::Other(other.to_string()),
        }
    }
}

/// Workout intensity level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutIntensity {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(untagged)]
    Other(String),
}

/// Meal slot within a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    #[serde(untagged)]
    Other(String),
}

/// A single food entry inside a meal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

/// A logged meal with nutrition totals
///
/// No identity beyond its position in a list. Every field may be absent so
/// that partially filled records can still be aggregated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Date the meal was eaten
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_date: Option<NaiveDate>,
    /// Breakfast, lunch, dinner, snack or a custom label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    /// Foods that make up the meal
    #[serde(default)]
    pub foods: Vec<FoodItem>,
    /// Total energy (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_calories: Option<f64>,
    /// Total protein (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_protein: Option<f64>,
    /// Total carbohydrates (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_carbs: Option<f64>,
    /// Total fat (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_fat: Option<f64>,
}

impl MealRecord {
    /// Create an empty meal of the given type
    pub fn new(meal_type: MealType) -> Self {
        Self {
            meal_type: Some(meal_type),
            ..Default::default()
        }
    }

    /// Set the log date
    pub fn on(mut self, log_date: NaiveDate) -> Self {
        self.log_date = Some(log_date);
        self
    }

    /// Set all four nutrition totals
    pub fn with_totals(mut self, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        self.total_calories = Some(calories);
        self.total_protein = Some(protein);
        self.total_carbs = Some(carbs);
        self.total_fat = Some(fat);
        self
    }

    /// Add a food to the meal
    pub fn with_food(mut self, food: FoodItem) -> Self {
        self.foods.push(food);
        self
    }

    /// Check the fields a stored meal log requires
    ///
    /// Aggregation never calls this; it only exists for callers that want to
    /// reject incomplete records before keeping them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_date.is_none() {
            return Err(ValidationError::MissingField("log_date"));
        }
        if self.meal_type.is_none() {
            return Err(ValidationError::MissingField("meal_type"));
        }
        Ok(())
    }
}

/// A day's wellness tracking entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub log_date: NaiveDate,
    /// Names of exercises completed that day
    #[serde(default)]
    pub exercises_completed: Vec<String>,
    #[serde(default)]
    pub water_glasses: u32,
    #[serde(default)]
    pub sleep_hours: f64,
    #[serde(default)]
    pub steps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyLog {
    /// Create an empty log for a date
    pub fn new(log_date: NaiveDate) -> Self {
        Self {
            log_date,
            exercises_completed: Vec::new(),
            water_glasses: 0,
            sleep_hours: 0.0,
            steps: 0,
            notes: None,
        }
    }
}

/// Static and biometric user attributes plus derived scores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Height (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_goal: Option<FitnessGoal>,
    /// Posture score (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posture_score: Option<u32>,
    /// Left/right symmetry score (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symmetry_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_intensity: Option<WorkoutIntensity>,
}

/// A reply under a community post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// A social feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityPost {
    #[serde(default)]
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub replies: Vec<Reply>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// A single exercise slot in a workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Day of the week, e.g. "Monday"
    pub day: String,
    pub name: String,
    #[serde(default)]
    pub sets: u32,
    #[serde(default)]
    pub reps: u32,
}

/// A weekly workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub plan_name: String,
    pub goal: FitnessGoal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<WorkoutIntensity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<u32>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// Validation errors for stored records
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_partial_meal() {
        let json = r#"{ "meal_type": "lunch", "total_calories": 600 }"#;

        let meal: MealRecord = serde_json::from_str(json).unwrap();
        assert_eq!(meal.meal_type, Some(MealType::Lunch));
        assert_eq!(meal.total_calories, Some(600.0));
        assert_eq!(meal.total_protein, None);
        assert!(meal.foods.is_empty());
    }

    #[test]
    fn test_deserialize_food_without_name() {
        let json = r#"{ "meal_type": "dinner", "foods": [{ "calories": 120 }, { "name": "Salmon" }] }"#;

        let meal: MealRecord = serde_json::from_str(json).unwrap();
        assert_eq!(meal.foods.len(), 2);
        assert_eq!(meal.foods[0].name, "");
        assert_eq!(meal.foods[0].calories, Some(120.0));
        assert_eq!(meal.foods[1].name, "Salmon");
    }

    #[test]
    fn test_unknown_goal_kept_verbatim() {
        let profile: UserProfile =
            serde_json::from_str(r#"{ "weight": 80, "fitness_goal": "bulk_up" }"#).unwrap();

        assert_eq!(
            profile.fitness_goal,
            Some(FitnessGoal::Other("bulk_up".to_string()))
        );

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"fitness_goal\":\"bulk_up\""));
    }

    #[test]
    fn test_known_goal_from_str() {
        assert_eq!(FitnessGoal::from("muscle_gain"), FitnessGoal::MuscleGain);
        assert_eq!(FitnessGoal::from("yoga"), FitnessGoal::Other("yoga".to_string()));
        assert_eq!(FitnessGoal::PostureImprovement.as_str(), "posture_improvement");
    }

    #[test]
    fn test_daily_log_defaults_to_zero() {
        let log: DailyLog = serde_json::from_str(r#"{ "log_date": "2024-01-15" }"#).unwrap();

        assert_eq!(log.water_glasses, 0);
        assert_eq!(log.sleep_hours, 0.0);
        assert_eq!(log.steps, 0);
        assert!(log.exercises_completed.is_empty());
    }

    #[test]
    fn test_community_post_defaults() {
        let post: CommunityPost = serde_json::from_str(r#"{ "content": "hello" }"#).unwrap();

        assert!(!post.is_anonymous);
        assert_eq!(post.likes, 0);
        assert!(post.replies.is_empty());
    }

    #[test]
    fn test_meal_validation() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        assert!(MealRecord::new(MealType::Dinner).on(date).validate().is_ok());
        assert_eq!(
            MealRecord::new(MealType::Dinner).validate(),
            Err(ValidationError::MissingField("log_date"))
        );
        assert_eq!(
            MealRecord::default().on(date).validate(),
            Err(ValidationError::MissingField("meal_type"))
        );
    }
}
