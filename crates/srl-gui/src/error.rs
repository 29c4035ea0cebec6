//! Startup errors.
//!
//! Nothing that happens after the window opens is fatal: validation errors
//! stay in the search form and fetch errors stay in their category. Only
//! failures before the event loop starts end the process.

use srl_fetch::ConfigError;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Errors that prevent the application from starting.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StartupError {
    /// The API configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A global log subscriber was already installed.
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] TryInitError),

    /// The windowing system failed.
    #[error("GUI error: {0}")]
    Gui(#[from] iced::Error),
}

impl StartupError {
    /// Process exit code for this failure.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Logging(_) | Self::Gui(_) => 1,
        }
    }

    /// Optional suggestion printed after the error.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Config(err) => Some(err.user_message()),
            Self::Logging(_) | Self::Gui(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_exit_code() {
        let err = StartupError::from(ConfigError::InvalidBaseUrl {
            url: "ftp://x".to_string(),
            reason: "scheme must be http or https".to_string(),
        });
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("ftp://x"));
        assert!(err.hint().is_some());
    }
}
