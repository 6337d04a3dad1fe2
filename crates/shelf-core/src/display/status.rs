//! Confirmation messages for commands that change state.

use std::fmt;

/// Outcome line printed after a command.
#[derive(Debug)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Confirmation for a favorite toggle.
    pub fn favorite_toggled(id: &str, now_favorite: bool) -> Self {
        if now_favorite {
            Self::success(format!("Added recipe {id} to favorites"))
        } else {
            Self::success(format!("Removed recipe {id} from favorites"))
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}
