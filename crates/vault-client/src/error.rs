//! Failure taxonomy for backend calls.

use std::path::PathBuf;

use vault_core::Notice;

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while talking to the backend or preparing a request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("request to {path} failed: {source}")]
    Transport {
        /// Endpoint path that was requested.
        path: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-success status.
    #[error("{path} returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Endpoint path that was requested.
        path: String,
        /// Backend message, or the raw body when no message was provided.
        message: String,
    },
    /// The response body was not the expected JSON shape.
    #[error("unexpected response from {path}: {source}")]
    Decode {
        /// Endpoint path that was requested.
        path: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// Input was rejected on the client before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// A local file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The client itself could not be configured.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Client-side rejection with a user-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// `true` for failures detected before any network traffic.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP status when the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Collapse into an error notice.
    ///
    /// Validation messages and backend messages are shown as they are;
    /// anything else uses `fallback`, the operation-specific description.
    #[must_use]
    pub fn to_notice(&self, fallback: &str) -> Notice {
        match self {
            Self::Validation(message) => Notice::error(message.clone()),
            Self::Status { message, .. } if !message.is_empty() => Notice::error(message.clone()),
            _ => Notice::error(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vault_core::Severity;

    #[test]
    fn notices_prefer_specific_messages() {
        let validation = ClientError::validation("Please select an audio file");
        assert!(validation.is_validation());
        assert_eq!(
            validation.to_notice("Failed to upload audio file").description,
            "Please select an audio file"
        );

        let status = ClientError::Status {
            status: 413,
            path: "/api/tracks/upload".into(),
            message: "File too large".into(),
        };
        assert_eq!(status.status(), Some(413));
        let notice = status.to_notice("Failed to upload audio file");
        assert_eq!(notice.description, "File too large");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(
            status.to_string(),
            "/api/tracks/upload returned 413: File too large"
        );
    }

    #[test]
    fn opaque_failures_use_fallback_text() {
        let err = ClientError::Status {
            status: 500,
            path: "/api/playlists".into(),
            message: String::new(),
        };
        assert_eq!(
            err.to_notice("Failed to create playlist").description,
            "Failed to create playlist"
        );
        let io = ClientError::Io {
            path: PathBuf::from("/tmp/missing.mp3"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(io.to_notice("Failed to upload audio file").title, "Error");
    }
}
