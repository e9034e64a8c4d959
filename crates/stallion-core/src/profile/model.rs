//! UserProfile domain model.

use serde::{Deserialize, Serialize};

use crate::catalog::{Campus, College};

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: '{other}'")),
        }
    }
}

/// User profile held by the surrounding application.
///
/// The session engine never reads this store; callers pass the college
/// and student number in as explicit context on each turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Contact address, when provided.
    #[serde(default)]
    pub email: String,
    /// The user's academic unit.
    pub college: College,
    /// Home campus.
    pub campus: Campus,
    /// Whether the user has signed in on this device.
    #[serde(default)]
    pub is_logged_in: bool,
    /// Display theme preference.
    #[serde(default)]
    pub theme: Theme,
    /// Verified student number, if Tutoring has been unlocked before.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Stallion Guest".to_string(),
            email: String::new(),
            college: College::Computing,
            campus: Campus::Batac,
            is_logged_in: false,
            theme: Theme::Light,
            student_id: None,
        }
    }
}
