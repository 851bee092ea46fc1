//! Workout plan helpers
//!
//! Day filtering for today's workout card and weekly completion rates for the
//! consistency chart.

use crate::schema::{DailyLog, Exercise, FitnessGoal, WorkoutIntensity, WorkoutPlan};
use crate::types::CompletionPoint;
use chrono::{Duration, NaiveDate};

/// Days shown in the weekly consistency chart
pub const COMPLETION_WINDOW_DAYS: i64 = 7;

/// Exercises scheduled for a given weekday name (e.g. "Monday")
pub fn get_today_exercises<'a>(plan: &'a WorkoutPlan, day_name: &str) -> Vec<&'a Exercise> {
    plan.exercises
        .iter()
        .filter(|exercise| exercise.day == day_name)
        .collect()
}

/// First `n` exercises
pub fn top_exercises(exercises: &[Exercise], n: usize) -> &[Exercise] {
    &exercises[..n.min(exercises.len())]
}

/// Completion rate for each of the seven days ending at `end_date`.
///
/// A day's expected count comes from the plan's exercises for that weekday and
/// its completed count from the first log dated that day. The percentage is
/// 0 when the plan schedules nothing. Days that fall before the earliest
/// representable date are left out.
pub fn compute_completion(
    logs: &[DailyLog],
    plan: &WorkoutPlan,
    end_date: NaiveDate,
) -> Vec<CompletionPoint> {
    (0..COMPLETION_WINDOW_DAYS)
        .rev()
        .filter_map(|offset| end_date.checked_sub_signed(Duration::days(offset)))
        .map(|date| {
            let weekday = date.format("%A").to_string();

            let completed = logs
                .iter()
                .find(|log| log.log_date == date)
                .map(|log| log.exercises_completed.len())
                .unwrap_or(0);
            let expected = get_today_exercises(plan, &weekday).len();

            CompletionPoint {
                date: date.format("%a").to_string(),
                completed,
                expected,
                percentage: completion_percentage(completed, expected),
            }
        })
        .collect()
}

fn completion_percentage(completed: usize, expected: usize) -> u32 {
    if expected == 0 {
        return 0;
    }
    (completed as f64 / expected as f64 * 100.0).round() as u32
}

/// Sample strength plan shown on the workouts tab
pub fn sample_workout_plan() -> WorkoutPlan {
    let exercise = |day: &str, name: &str, sets: u32, reps: u32| Exercise {
        day: day.to_string(),
        name: name.to_string(),
        sets,
        reps,
    };

    WorkoutPlan {
        plan_name: "Strength Foundations".to_string(),
        goal: FitnessGoal::MuscleGain,
        intensity: Some(WorkoutIntensity::Intermediate),
        duration_weeks: Some(8),
        exercises: vec![
            exercise("Monday", "Bench Press", 4, 8),
            exercise("Monday", "Incline Dumbbell", 3, 10),
            exercise("Tuesday", "Squat", 4, 6),
            exercise("Wednesday", "Deadlift", 3, 5),
        ],
    }
}

/// One-line description of an exercise, e.g. "Monday: Squat - 4x6"
pub fn describe_exercise(exercise: &Exercise) -> String {
    format!(
        "{}: {} - {}x{}",
        exercise.day, exercise.name, exercise.sets, exercise.reps
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(day: u32) -> NaiveDate {
        // January 2024: the 1st is a Monday
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn log_with(day: u32, done: &[&str]) -> DailyLog {
        DailyLog {
            exercises_completed: done.iter().map(|s| s.to_string()).collect(),
            ..DailyLog::new(date(day))
        }
    }

    #[test]
    fn test_today_exercises() {
        let plan = sample_workout_plan();

        let monday: Vec<&str> = get_today_exercises(&plan, "Monday")
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(monday, vec!["Bench Press", "Incline Dumbbell"]);
        assert!(get_today_exercises(&plan, "Sunday").is_empty());
    }

    #[test]
    fn test_top_exercises() {
        let plan = sample_workout_plan();

        assert_eq!(top_exercises(&plan.exercises, 3).len(), 3);
        assert_eq!(top_exercises(&plan.exercises, 10).len(), 4);
        assert!(top_exercises(&plan.exercises, 0).is_empty());
    }

    #[test]
    fn test_completion_week() {
        let plan = sample_workout_plan();
        let logs = vec![
            log_with(1, &["Bench Press"]),
            log_with(2, &["Squat"]),
            log_with(4, &["Walk"]),
        ];

        // Sunday 7th back to Monday 1st
        let points = compute_completion(&logs, &plan, date(7));

        assert_eq!(points.len(), 7);
        assert_eq!(
            points[0],
            CompletionPoint {
                date: "Mon".to_string(),
                completed: 1,
                expected: 2,
                percentage: 50,
            }
        );
        assert_eq!(points[1].date, "Tue");
        assert_eq!(points[1].percentage, 100);
        assert_eq!(points[2].date, "Wed");
        assert_eq!(points[2].percentage, 0);
        // Thursday has no plan entries, so completion stays 0
        assert_eq!(points[3].completed, 1);
        assert_eq!(points[3].expected, 0);
        assert_eq!(points[3].percentage, 0);
        assert_eq!(points[6].date, "Sun");
    }

    #[test]
    fn test_completion_rounds() {
        let mut plan = sample_workout_plan();
        plan.exercises.push(Exercise {
            day: "Monday".to_string(),
            name: "Rows".to_string(),
            sets: 3,
            reps: 10,
        });
        let logs = vec![log_with(1, &["Bench Press", "Rows"])];

        let points = compute_completion(&logs, &plan, date(1));
        // 2 of 3 done
        assert_eq!(points[6].percentage, 67);
    }

    #[test]
    fn test_completion_at_earliest_date() {
        let points = compute_completion(&[], &sample_workout_plan(), NaiveDate::MIN);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].completed, 0);
    }

    #[test]
    fn test_describe_exercise() {
        let plan = sample_workout_plan();
        assert_eq!(describe_exercise(&plan.exercises[2]), "Tuesday: Squat - 4x6");
    }
}
