//! Parsing helpers for JSON-encoded FitFlow records
//!
//! Records arrive either as a JSON array or as NDJSON (one record per line).
//! Both forms parse into the typed records defined in `records`.

use crate::error::FitflowError;
use crate::schema::records::{MealRecord, ValidationError};
use serde::de::DeserializeOwned;

/// Adapter for turning JSON text into typed records
pub struct RecordAdapter;

/// Validation outcome for a single meal in a batch
#[derive(Debug, Clone)]
pub struct MealValidation {
    /// Position of the meal in the input
    pub index: usize,
    pub result: Result<(), ValidationError>,
}

impl RecordAdapter {
    /// Parse a JSON string containing an array of records
    pub fn parse_array<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, FitflowError> {
        let records: Vec<T> = serde_json::from_str(json)?;
        Ok(records)
    }

    /// Parse NDJSON (newline-delimited JSON) containing records
    pub fn parse_ndjson<T: DeserializeOwned>(ndjson: &str) -> Result<Vec<T>, FitflowError> {
        let mut records = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<T>(trimmed) {
                Ok(record) => records.push(record),
                Err(e) => {
                    return Err(FitflowError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(records)
    }

    /// Validate a batch of meals, returning only the failures
    pub fn validate_meals(meals: &[MealRecord]) -> Vec<MealValidation> {
        meals
            .iter()
            .enumerate()
            .map(|(index, meal)| MealValidation {
                index,
                result: meal.validate(),
            })
            .filter(|v| v.result.is_err())
            .collect()
    }
}

/// Parse a JSON array of meal records
pub fn parse_meal_array(json: &str) -> Result<Vec<MealRecord>, FitflowError> {
    RecordAdapter::parse_array(json)
}

/// Parse NDJSON meal records
pub fn parse_meal_ndjson(ndjson: &str) -> Result<Vec<MealRecord>, FitflowError> {
    RecordAdapter::parse_ndjson(ndjson)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::records::{DailyLog, MealType};

    #[test]
    fn test_parse_meal_array() {
        let json = r#"[
            { "log_date": "2024-01-15", "meal_type": "breakfast", "total_calories": 350 },
            { "log_date": "2024-01-15", "meal_type": "brunch", "foods": [{ "name": "Toast" }] }
        ]"#;

        let meals = parse_meal_array(json).unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].meal_type, Some(MealType::Breakfast));
        assert_eq!(meals[1].meal_type, Some(MealType::Other("brunch".to_string())));
        assert_eq!(meals[1].foods[0].name, "Toast");
    }

    #[test]
    fn test_parse_ndjson_skips_blank_lines() {
        let ndjson = "{\"log_date\": \"2024-01-15\", \"steps\": 4000}\n\n{\"log_date\": \"2024-01-16\"}\n";

        let logs: Vec<DailyLog> = RecordAdapter::parse_ndjson(ndjson).unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].steps, 4000);
        assert_eq!(logs[1].steps, 0);
    }

    #[test]
    fn test_parse_ndjson_reports_line() {
        let ndjson = "{\"meal_type\": \"lunch\"}\nnot json\n";

        let err = parse_meal_ndjson(ndjson).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(parse_meal_array("not valid json").is_err());
    }

    #[test]
    fn test_validate_meals_returns_failures() {
        let json = r#"[
            { "log_date": "2024-01-15", "meal_type": "lunch" },
            { "meal_type": "dinner" },
            { "log_date": "2024-01-15" }
        ]"#;

        let meals = parse_meal_array(json).unwrap();
        let failures = RecordAdapter::validate_meals(&meals);

        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].index, 1);
        assert_eq!(failures[1].index, 2);
        assert_eq!(
            failures[1].result,
            Err(ValidationError::MissingField("meal_type"))
        );
    }
}
