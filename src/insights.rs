//! Insight panels
//!
//! Sample insight reports for the analytics, nutrition and all-insights panels.
//! Report contents are fixed; only the gating on available data is computed.

use crate::schema::{MealRecord, UserProfile};
use crate::types::NutritionTotals;
use serde::{Deserialize, Serialize};

/// Meal records needed before nutrition insights are shown
pub const MIN_MEALS_FOR_INSIGHTS: usize = 2;

/// Category of an insight card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Correlation,
    Suggestion,
    Positive,
    Warning,
}

/// A single insight card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

impl Insight {
    fn new(kind: InsightKind, title: &str, description: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Analytics panel report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsReport {
    pub overall_score: u32,
    pub top_recommendation: String,
    pub insights: Vec<Insight>,
}

/// Nutrition panel report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInsightsReport {
    /// How closely intake matches the goal (0-100)
    pub goal_alignment: u32,
    pub top_recommendation: String,
    pub insights: Vec<Insight>,
}

/// Sample analytics report
pub fn sample_insights() -> InsightsReport {
    InsightsReport {
        overall_score: 78,
        top_recommendation: "Increase sleep to 7-8 hours/night".to_string(),
        insights: vec![
            Insight::new(
                InsightKind::Correlation,
                "Sleep vs Performance",
                "Better sleep correlates with more workouts",
            ),
            Insight::new(
                InsightKind::Suggestion,
                "Hydration",
                "Average water is low, aim for +2 glasses",
            ),
        ],
    }
}

/// Insights for the all-insights panel
pub fn generate_insights_for_all() -> Vec<Insight> {
    vec![
        Insight::new(
            InsightKind::Positive,
            "Great consistency",
            "You worked out 5 days last week.",
        ),
        Insight::new(
            InsightKind::Suggestion,
            "Hydration",
            "Increase water by 1-2 glasses/day.",
        ),
    ]
}

/// Nutrition insights for a week of meals.
///
/// Returns `None` until at least two meals have been logged.
pub fn generate_nutrition_insights(
    weekly_meals: &[MealRecord],
    _profile: &UserProfile,
    _daily_totals: &NutritionTotals,
) -> Option<NutritionInsightsReport> {
    if weekly_meals.len() < MIN_MEALS_FOR_INSIGHTS {
        return None;
    }

    Some(NutritionInsightsReport {
        goal_alignment: 70,
        top_recommendation: "Slightly increase protein to reach 1.6-2g/kg".to_string(),
        insights: vec![
            Insight::new(
                InsightKind::Suggestion,
                "Protein Intake",
                "Protein is slightly below target.",
            ),
            Insight::new(
                InsightKind::Positive,
                "Calories",
                "Average calories align moderately with goal.",
            ),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::MealType;

    #[test]
    fn test_sample_insights() {
        let report = sample_insights();
        assert_eq!(report.overall_score, 78);
        assert_eq!(report.insights.len(), 2);
        assert_eq!(report.insights[0].kind, InsightKind::Correlation);
    }

    #[test]
    fn test_report_fields_are_camel_case() {
        let json = serde_json::to_value(sample_insights()).unwrap();
        assert_eq!(json["overallScore"], 78);
        assert_eq!(json["topRecommendation"], "Increase sleep to 7-8 hours/night");
        assert!(json.get("overall_score").is_none());

        let meals = vec![MealRecord::new(MealType::Lunch), MealRecord::new(MealType::Dinner)];
        let report = generate_nutrition_insights(
            &meals,
            &UserProfile::default(),
            &NutritionTotals::default(),
        )
        .unwrap();
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["goalAlignment"], 70);
    }

    #[test]
    fn test_insight_kind_serializes_as_type() {
        let json = serde_json::to_value(&generate_insights_for_all()[0]).unwrap();
        assert_eq!(json["type"], "positive");
        assert_eq!(json["title"], "Great consistency");
    }

    #[test]
    fn test_nutrition_insights_need_two_meals() {
        let profile = UserProfile::default();
        let totals = NutritionTotals::default();
        let one = vec![MealRecord::new(MealType::Lunch)];

        assert!(generate_nutrition_insights(&[], &profile, &totals).is_none());
        assert!(generate_nutrition_insights(&one, &profile, &totals).is_none());

        let two = vec![MealRecord::new(MealType::Lunch), MealRecord::new(MealType::Dinner)];
        let report = generate_nutrition_insights(&two, &profile, &totals).unwrap();
        assert_eq!(report.goal_alignment, 70);
        assert_eq!(report.insights[0].title, "Protein Intake");
    }
}
