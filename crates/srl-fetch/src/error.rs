//! Startup configuration errors.

use thiserror::Error;

/// Errors raised while building the fetcher from configuration.
///
/// Request failures are reported per category as
/// [`FetchError`](srl_model::FetchError) and never surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The API base URL is unusable.
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl ConfigError {
    /// Returns a user-friendly message for the startup failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidBaseUrl { .. } => {
                "STUDENT_API_BASE_URL must be an http:// or https:// URL with a host."
            }
            Self::Client(_) => "The HTTP client could not be initialized.",
        }
    }
}

impl From<reqwest::Error> for ConfigError {
    fn from(err: reqwest::Error) -> Self {
        Self::Client(err.to_string())
    }
}
