//! Helper catalog and canned demo
//!
//! The list of helpers advertised by `fitflow --list` and the sample sections
//! printed by `fitflow --demo`.

use crate::error::FitflowError;
use crate::schema::{parse_meal_array, FitnessGoal, UserProfile};
use crate::{community, foods, insights, nutrition, shell, workouts};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// Helper functions advertised by the CLI, in listing order
pub const HELPERS: &[&str] = &[
    "dashboard_info",
    "get_profile_stub",
    "sample_insights",
    "compute_daily_totals",
    "macro_breakdown",
    "compute_targets",
    "sample_posts",
    "render_post",
    "get_today_exercises",
    "search_foods",
    "estimate_from_description",
    "generate_nutrition_insights",
];

/// Meals used by the daily-totals demo
const DEMO_MEALS_JSON: &str = r#"[
    { "meal_type": "breakfast", "total_calories": 350, "total_protein": 20, "total_carbs": 40, "total_fat": 10 },
    { "meal_type": "lunch", "total_calories": 600, "total_protein": 35, "total_carbs": 70, "total_fat": 18 }
]"#;

/// One titled block of demo output
#[derive(Debug, Clone, Serialize)]
pub struct DemoSection {
    pub title: String,
    pub output: serde_json::Value,
}

impl DemoSection {
    fn new<T: Serialize>(title: &str, output: &T) -> Result<Self, FitflowError> {
        Ok(Self {
            title: title.to_string(),
            output: serde_json::to_value(output)?,
        })
    }
}

/// Build the demo sections in display order
pub fn demo_sections() -> Result<Vec<DemoSection>, FitflowError> {
    let meals = parse_meal_array(DEMO_MEALS_JSON)?;
    let totals = nutrition::compute_daily_totals(&meals);
    let profile = UserProfile {
        weight: Some(70.0),
        fitness_goal: Some(FitnessGoal::WeightLoss),
        ..Default::default()
    };

    let plan = workouts::sample_workout_plan();
    let monday: Vec<String> = workouts::get_today_exercises(&plan, "Monday")
        .into_iter()
        .map(workouts::describe_exercise)
        .collect();

    let sections = vec![
        DemoSection::new("dashboard_info", &shell::dashboard_info())?,
        DemoSection::new("get_profile_stub", &shell::get_profile_stub())?,
        DemoSection::new("compute_daily_totals (two meals)", &totals)?,
        DemoSection::new("macro_breakdown", &nutrition::macro_breakdown(&totals))?,
        DemoSection::new(
            "compute_targets (70kg, weight_loss)",
            &nutrition::compute_targets(&profile),
        )?,
        DemoSection::new("search_foods(\"chicken\")", &foods::search_foods("chicken"))?,
        DemoSection::new(
            "render_post",
            &community::sample_posts()
                .iter()
                .map(community::render_post)
                .collect::<Vec<_>>(),
        )?,
        DemoSection::new("get_today_exercises(\"Monday\")", &monday)?,
        DemoSection::new("sample_insights", &insights::sample_insights())?,
    ];

    debug!(sections = sections.len(), "built demo");
    Ok(sections)
}

/// Write the helper listing, one `  - name` line per helper
pub fn write_listing<W: Write>(out: &mut W) -> Result<(), FitflowError> {
    writeln!(out, "Available helper functions (sections):")?;
    for name in HELPERS {
        writeln!(out, "  - {name}")?;
    }
    Ok(())
}

/// Write every demo section as a header followed by pretty-printed JSON
pub fn write_demo<W: Write>(out: &mut W) -> Result<(), FitflowError> {
    for section in demo_sections()? {
        writeln!(out)?;
        writeln!(out, "=== Demo: {} ===", section.title)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&section.output)?)?;
    }
    Ok(())
}

/// Hint printed after the listing when no mode is chosen
pub const DEMO_HINT: &str = "Run with --demo for example output";

/// Write the output for the chosen CLI mode.
///
/// `list` takes precedence over `demo`; with neither, the listing is followed
/// by a blank line and a hint about `--demo`.
pub fn write_mode<W: Write>(list: bool, demo: bool, out: &mut W) -> Result<(), FitflowError> {
    if list {
        debug!("listing helpers");
        write_listing(out)
    } else if demo {
        debug!("running demo");
        write_demo(out)
    } else {
        write_listing(out)?;
        writeln!(out)?;
        writeln!(out, "{DEMO_HINT}")?;
        Ok(())
    }
}
