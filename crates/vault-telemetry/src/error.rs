//! Error types for telemetry operations.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Result alias for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Errors raised by telemetry helpers.
#[derive(Debug)]
pub enum TelemetryError {
    /// Installing the tracing subscriber failed.
    SubscriberInstall {
        /// Underlying subscriber error, rendered to text.
        message: String,
    },
    /// The configured filter directive could not be parsed.
    InvalidFilter {
        /// Directive that was rejected.
        directive: String,
        /// Underlying parse error.
        source: tracing_subscriber::filter::ParseError,
    },
}

impl Display for TelemetryError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubscriberInstall { message } => {
                write!(formatter, "failed to install tracing subscriber: {message}")
            }
            Self::InvalidFilter { directive, .. } => {
                write!(formatter, "invalid log filter '{directive}'")
            }
        }
    }
}

impl Error for TelemetryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SubscriberInstall { .. } => None,
            Self::InvalidFilter { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn telemetry_error_display_and_source() {
        let install = TelemetryError::SubscriberInstall {
            message: "already set".to_string(),
        };
        assert_eq!(
            install.to_string(),
            "failed to install tracing subscriber: already set"
        );
        assert!(install.source().is_none());

        let parse_error = EnvFilter::try_new("vault=notalevel")
            .err()
            .expect("directive should be rejected");
        let filter = TelemetryError::InvalidFilter {
            directive: "vault=notalevel".to_string(),
            source: parse_error,
        };
        assert_eq!(filter.to_string(), "invalid log filter 'vault=notalevel'");
        assert!(filter.source().is_some());
    }
}
