//! CLI error type and the context shared by command handlers.

use std::fmt::{self, Display, Formatter};

use anyhow::anyhow;
use url::Url;
use vault_client::{ApiClient, ClientError};
use vault_core::Notice;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    /// Map a client error, using `fallback` as the operation description.
    ///
    /// Local rejections and 400/409/422 answers count as validation errors.
    pub(crate) fn from_client(err: ClientError, fallback: &str) -> Self {
        let rejected = err.is_validation() || matches!(err.status(), Some(400 | 409 | 422));
        if rejected {
            Self::Validation(err.to_notice(fallback).description)
        } else {
            Self::Failure(anyhow::Error::new(err).context(fallback.to_string()))
        }
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }

    /// Error notice reported when a command ends with this error.
    pub(crate) fn to_notice(&self) -> Notice {
        Notice::error(self.display_message())
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) client: ApiClient,
}

/// Parse the API URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}

pub(crate) fn json_failure(err: &serde_json::Error) -> CliError {
    CliError::failure(anyhow!("failed to format JSON: {err}"))
}
