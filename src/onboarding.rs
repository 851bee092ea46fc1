//! Onboarding step helpers
//!
//! Presence checks for the basic-info and measurements steps, the goal list
//! and the analysis shown at the end of onboarding.

use crate::schema::{FitnessGoal, WorkoutIntensity};
use serde::{Deserialize, Serialize};

/// Basic-info step form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicInfoForm {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub body_type: Option<String>,
}

/// Body measurements step form (cm)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementsForm {
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub hips: Option<f64>,
    #[serde(default)]
    pub shoulder_width: Option<f64>,
    #[serde(default)]
    pub arms: Option<f64>,
    #[serde(default)]
    pub legs: Option<f64>,
}

/// Result of a form presence check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValidation {
    pub valid: bool,
    /// Required fields that were absent, in form order
    pub missing: Vec<String>,
}

impl FormValidation {
    fn from_missing(missing: Vec<&str>) -> Self {
        Self {
            valid: missing.is_empty(),
            missing: missing.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Analysis returned once onboarding is complete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingAnalysis {
    pub posture_score: u32,
    pub symmetry_score: u32,
    pub workout_intensity: WorkoutIntensity,
    pub reasoning: String,
}

/// Check that age, height, weight and body type are filled in.
///
/// An empty body type counts as missing.
pub fn validate_basic_info(form: &BasicInfoForm) -> FormValidation {
    let body_type_present = form.body_type.as_deref().is_some_and(|s| !s.is_empty());

    let missing = [
        ("age", form.age.is_some()),
        ("height", form.height.is_some()),
        ("weight", form.weight.is_some()),
        ("body_type", body_type_present),
    ]
    .into_iter()
    .filter(|(_, present)| !present)
    .map(|(name, _)| name)
    .collect();

    FormValidation::from_missing(missing)
}

/// Check that every body measurement is present
pub fn validate_measurements(form: &MeasurementsForm) -> FormValidation {
    let missing = [
        ("chest", form.chest),
        ("waist", form.waist),
        ("hips", form.hips),
        ("shoulder_width", form.shoulder_width),
        ("arms", form.arms),
        ("legs", form.legs),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_none())
    .map(|(name, _)| name)
    .collect();

    FormValidation::from_missing(missing)
}

/// Analysis shown at the end of onboarding. The values are fixed.
pub fn generate_ai_analysis_for_onboarding(
    _basic: &BasicInfoForm,
    _measurements: &MeasurementsForm,
) -> OnboardingAnalysis {
    OnboardingAnalysis {
        posture_score: 70,
        symmetry_score: 65,
        workout_intensity: WorkoutIntensity::Intermediate,
        reasoning: "Balanced measurements with mild asymmetry.".to_string(),
    }
}

/// Goals selectable in the goal step
pub fn available_goals() -> Vec<FitnessGoal> {
    FitnessGoal::KNOWN.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_info_complete() {
        let form = BasicInfoForm {
            age: Some(29),
            height: Some(178.0),
            weight: Some(74.5),
            body_type: Some("mesomorph".to_string()),
        };

        let result = validate_basic_info(&form);
        assert!(result.valid);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_basic_info_missing_fields() {
        let form = BasicInfoForm {
            age: Some(29),
            body_type: Some(String::new()),
            ..Default::default()
        };

        let result = validate_basic_info(&form);
        assert_eq!(
            result,
            FormValidation {
                valid: false,
                missing: vec![
                    "height".to_string(),
                    "weight".to_string(),
                    "body_type".to_string()
                ],
            }
        );
    }

    #[test]
    fn test_measurements_from_json() {
        let form: MeasurementsForm = serde_json::from_str(
            r#"{ "chest": 100, "waist": 82, "hips": 96, "arms": 34 }"#,
        )
        .unwrap();

        let result = validate_measurements(&form);
        assert!(!result.valid);
        assert_eq!(result.missing, vec!["shoulder_width", "legs"]);
    }

    #[test]
    fn test_measurements_zero_counts_as_present() {
        let form = MeasurementsForm {
            chest: Some(0.0),
            waist: Some(0.0),
            hips: Some(0.0),
            shoulder_width: Some(0.0),
            arms: Some(0.0),
            legs: Some(0.0),
        };

        assert!(validate_measurements(&form).valid);
    }

    #[test]
    fn test_available_goals() {
        let goals = available_goals();
        let names: Vec<&str> = goals.iter().map(FitnessGoal::as_str).collect();
        assert_eq!(
            names,
            vec![
                "weight_loss",
                "muscle_gain",
                "flexibility",
                "posture_improvement",
                "endurance"
            ]
        );
    }

    #[test]
    fn test_onboarding_analysis() {
        let analysis =
            generate_ai_analysis_for_onboarding(&BasicInfoForm::default(), &MeasurementsForm::default());

        assert_eq!(analysis.posture_score, 70);
        assert_eq!(analysis.symmetry_score, 65);
        assert_eq!(analysis.workout_intensity, WorkoutIntensity::Intermediate);
    }
}
