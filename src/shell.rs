//! Data behind the app shell
//!
//! Dashboard description and stat cards, navigation, the mock auth check and
//! the settings-tab profile stub. A graphical shell renders these as-is.

use crate::schema::{UserProfile, WorkoutIntensity};
use serde::{Deserialize, Serialize};

/// Name and purpose of a screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenInfo {
    pub name: String,
    pub description: String,
}

/// Entry in the bottom navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    /// Target screen
    pub path: String,
}

/// Result of the auth check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    /// Screen to open after a successful check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// Acknowledgement returned when a profile is saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub status: String,
    pub saved: UserProfile,
}

/// A dashboard stat card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub subtitle: Option<String>,
}

/// Description of the dashboard screen
pub fn dashboard_info() -> ScreenInfo {
    ScreenInfo {
        name: "Dashboard (stub)".to_string(),
        description: "Provides high-level user summary and quick actions.".to_string(),
    }
}

/// Bottom navigation entries, in display order
pub fn nav_items() -> Vec<NavItem> {
    [
        ("Home", "Dashboard"),
        ("Workout", "WorkoutPlan"),
        ("Nutrition", "Nutrition"),
        ("Analytics", "Analytics"),
        ("Settings", "Settings"),
    ]
    .into_iter()
    .map(|(name, path)| NavItem {
        name: name.to_string(),
        path: path.to_string(),
    })
    .collect()
}

/// Auth check. The mock always succeeds and sends the user to the dashboard.
pub fn check_auth(mock: bool) -> AuthStatus {
    if mock {
        AuthStatus {
            authenticated: true,
            redirect: Some("Dashboard".to_string()),
        }
    } else {
        AuthStatus {
            authenticated: false,
            redirect: None,
        }
    }
}

/// Profile shown on the settings tab before a real profile is loaded
pub fn get_profile_stub() -> UserProfile {
    UserProfile {
        full_name: Some("Demo User".to_string()),
        email: Some("demo@example.com".to_string()),
        posture_score: Some(72),
        symmetry_score: Some(68),
        workout_intensity: Some(WorkoutIntensity::Intermediate),
        ..Default::default()
    }
}

/// Acknowledge a profile save. Nothing is stored.
pub fn save_profile(profile: UserProfile) -> SaveReceipt {
    SaveReceipt {
        status: "ok".to_string(),
        saved: profile,
    }
}

/// Build a stat card
pub fn create_stat_card(
    title: impl Into<String>,
    value: impl Into<String>,
    subtitle: Option<String>,
) -> StatCard {
    StatCard {
        title: title.into(),
        value: value.into(),
        subtitle,
    }
}

/// Sample cards shown on the dashboard
pub fn dashboard_stats() -> Vec<StatCard> {
    [
        ("Overall Score", "78"),
        ("Water Intake", "6/8 glasses"),
        ("Sleep", "7 hrs"),
        ("Steps", "8,243"),
        ("Calories", "2,150/2,500"),
        ("Protein", "65g"),
    ]
    .into_iter()
    .map(|(title, value)| create_stat_card(title, value, None))
    .collect()
}
