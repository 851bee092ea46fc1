//! Daily wellness tracking
//!
//! Helpers behind the daily tracker and the wellness charts: building and
//! updating daily logs, averaging them, turning them into chart series and
//! measuring progress against the daily targets.

use crate::error::FitflowError;
use crate::schema::{DailyLog, UserProfile};
use crate::types::{MetricsSummary, SeriesPoint, TrackerProgress, WeightPoint};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted for log dates
pub const LOG_DATE_FORMAT: &str = "%Y-%m-%d";

/// Daily weight drift used for the synthetic body history (kg per day)
const HISTORY_WEIGHT_STEP_KG: f64 = 0.1;

/// Trackable daily metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerMetric {
    WaterGlasses,
    SleepHours,
    Steps,
}

impl TrackerMetric {
    /// Read this metric from a log
    pub fn value(&self, log: &DailyLog) -> f64 {
        match self {
            TrackerMetric::WaterGlasses => log.water_glasses as f64,
            TrackerMetric::SleepHours => log.sleep_hours,
            TrackerMetric::Steps => log.steps as f64,
        }
    }
}

/// A single field change from the quick tracker
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerUpdate {
    Water(i64),
    Sleep(f64),
    Steps(i64),
    Notes(String),
}

/// Daily goals the quick tracker measures progress against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    pub water_glasses: f64,
    pub sleep_hours: f64,
    pub steps: f64,
}

impl Default for DailyTargets {
    fn default() -> Self {
        Self {
            water_glasses: 8.0,
            sleep_hours: 8.0,
            steps: 10_000.0,
        }
    }
}

impl DailyLog {
    /// Apply a tracker update in place. Negative values clamp to zero.
    pub fn apply(&mut self, update: TrackerUpdate) -> &mut Self {
        match update {
            TrackerUpdate::Water(glasses) => {
                self.water_glasses = glasses.clamp(0, u32::MAX as i64) as u32;
            }
            TrackerUpdate::Sleep(hours) => self.sleep_hours = hours.max(0.0),
            TrackerUpdate::Steps(steps) => self.steps = steps.clamp(0, u32::MAX as i64) as u32,
            TrackerUpdate::Notes(notes) => self.notes = Some(notes),
        }
        self
    }
}

/// Build a daily log from a `YYYY-MM-DD` date and tracker values
pub fn make_log(
    date: &str,
    water_glasses: u32,
    sleep_hours: f64,
    steps: u32,
) -> Result<DailyLog, FitflowError> {
    let log_date = NaiveDate::parse_from_str(date, LOG_DATE_FORMAT)
        .map_err(|e| FitflowError::DateParseError(format!("{date}: {e}")))?;

    Ok(DailyLog {
        water_glasses,
        sleep_hours,
        steps,
        ..DailyLog::new(log_date)
    })
}

/// Average water, sleep and steps across logs. `None` when there are no logs.
pub fn summarize_metrics(logs: &[DailyLog]) -> Option<MetricsSummary> {
    if logs.is_empty() {
        return None;
    }

    let count = logs.len() as f64;
    let average = |metric: TrackerMetric| logs.iter().map(|l| metric.value(l)).sum::<f64>() / count;

    Some(MetricsSummary {
        avg_water: average(TrackerMetric::WaterGlasses),
        avg_sleep: average(TrackerMetric::SleepHours),
        avg_steps: average(TrackerMetric::Steps),
    })
}

/// Chart series of `days` points labelled "Day 1".."Day N".
///
/// Point `i` takes its value from the `i`-th log; days past the end of the
/// logs read as 0.
pub fn time_series_from_logs(
    logs: &[DailyLog],
    metric: TrackerMetric,
    days: usize,
) -> Vec<SeriesPoint> {
    (0..days)
        .map(|i| SeriesPoint {
            date: format!("Day {}", i + 1),
            value: logs.get(i).map(|log| metric.value(log)).unwrap_or(0.0),
        })
        .collect()
}

/// Progress toward the default daily targets
pub fn tracker_progress(log: &DailyLog) -> TrackerProgress {
    tracker_progress_with(log, &DailyTargets::default())
}

/// Progress toward custom daily targets, each capped at 100
pub fn tracker_progress_with(log: &DailyLog, targets: &DailyTargets) -> TrackerProgress {
    TrackerProgress {
        water: percent_of(log.water_glasses as f64, targets.water_glasses),
        sleep: percent_of(log.sleep_hours, targets.sleep_hours),
        steps: percent_of(log.steps as f64, targets.steps),
    }
}

/// `value / target` as a percentage capped at 100; 0 for a non-positive target
pub(crate) fn percent_of(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (value / target * 100.0).min(100.0)
}

/// Synthetic body weight history drifting down 0.1 kg per day.
///
/// Returns nothing without a profile; a profile without a weight starts at 70 kg.
pub fn generate_historical_body(profile: Option<&UserProfile>, days: usize) -> Vec<WeightPoint> {
    let Some(profile) = profile else {
        return Vec::new();
    };
    let base_weight = profile.weight.unwrap_or(crate::nutrition::DEFAULT_WEIGHT_KG);

    (0..days)
        .map(|i| WeightPoint {
            date: format!("Day {}", i + 1),
            weight: round_to_tenth(base_weight - i as f64 * HISTORY_WEIGHT_STEP_KG),
        })
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
