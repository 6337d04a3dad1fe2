//! Status enumerations for request lines and preferences.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle of one logical request line (catalog, detail or bulk detail).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Nothing has been requested yet
    #[default]
    Idle,

    /// A request is in flight
    Loading,

    /// The latest request delivered its payload
    Succeeded,

    /// The latest request failed; the line carries an error message
    Failed,
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(RequestStatus::Idle),
            "loading" => Ok(RequestStatus::Loading),
            "succeeded" => Ok(RequestStatus::Succeeded),
            "failed" => Ok(RequestStatus::Failed),
            _ => Err(format!("Invalid request status: {s}")),
        }
    }
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Idle => "idle",
            RequestStatus::Loading => "loading",
            RequestStatus::Succeeded => "succeeded",
            RequestStatus::Failed => "failed",
        }
    }

    /// Whether the line has settled on a result.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Succeeded | RequestStatus::Failed)
    }
}

/// User interface theme preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme: {s}")),
        }
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
