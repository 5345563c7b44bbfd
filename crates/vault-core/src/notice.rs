//! The single user-facing notification every outcome collapses into.

use std::fmt;

use serde::Serialize;

/// How an outcome should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The operation completed.
    Success,
    /// The primary operation completed but a follow-up step did not.
    Warning,
    /// The operation failed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// Title, description and severity of one outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Short heading.
    pub title: String,
    /// Human-readable detail.
    pub description: String,
    /// Presentation level.
    pub severity: Severity,
}

impl Notice {
    /// Successful outcome titled "Success".
    #[must_use]
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            severity: Severity::Success,
        }
    }

    /// Partial outcome titled "Warning".
    #[must_use]
    pub fn warning(description: impl Into<String>) -> Self {
        Self {
            title: "Warning".to_string(),
            description: description.into(),
            severity: Severity::Warning,
        }
    }

    /// Failed outcome titled "Error".
    #[must_use]
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
