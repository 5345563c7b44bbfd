//! Connection settings for [`ApiClient`](crate::ApiClient).

use std::time::Duration;

use url::Url;

/// Backend address used when none is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
/// Overall per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how to reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin; endpoint paths are joined onto it.
    pub base_url: Url,
    /// Session cookie pair (for example `connect.sid=...`) sent with every
    /// request.
    pub session: Option<String>,
    /// Overall timeout applied to each request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Settings for `base_url` with no session and the default timeout.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            session: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Attach a session cookie; blank values are ignored.
    #[must_use]
    pub fn with_session(mut self, session: Option<String>) -> Self {
        self.session = session
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_trims_and_drops_blank_sessions() -> anyhow::Result<()> {
        let base = Url::parse(DEFAULT_API_URL)?;
        let config = ClientConfig::new(base.clone()).with_session(Some("  ".into()));
        assert_eq!(config.session, None);

        let config = ClientConfig::new(base)
            .with_session(Some(" connect.sid=abc ".into()))
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.session.as_deref(), Some("connect.sid=abc"));
        assert_eq!(config.timeout, Duration::from_secs(3));
        Ok(())
    }
}
