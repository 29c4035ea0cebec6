//! Error types for identifier validation and record fetching.

use thiserror::Error;

/// Rejection reasons for a typed student ID.
///
/// Validation errors never leave the search form: they block the lookup and
/// are shown inline next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Nothing was entered.
    #[error("student ID is empty")]
    Empty,

    /// The input contains something other than decimal digits.
    #[error("'{input}' is not a number")]
    NotANumber {
        /// The trimmed input as typed.
        input: String,
    },

    /// The input is a number but not a positive one.
    #[error("student ID must be greater than zero")]
    NotPositive,

    /// The input has too many digits to be an ID.
    #[error("student ID is too large")]
    TooLarge,
}

impl ValidationError {
    /// Returns a message suitable for display under the search box.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Empty => "Enter a student ID to search.",
            Self::NotANumber { .. } => "Please enter a valid student ID (digits only).",
            Self::NotPositive => "Student IDs start at 1.",
            Self::TooLarge => "That student ID is too long.",
        }
    }
}

/// Failure of a single category request.
///
/// `NotFound` is kept as a variant so the transport layer can report a 404
/// through the normal error channel; normalization turns it into the
/// not-found state rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The API answered 404 for this record.
    #[error("record not found (HTTP 404)")]
    NotFound,

    /// The API answered with a non-success status other than 404.
    #[error("HTTP {status}: {message}")]
    Http {
        /// Response status code.
        status: u16,
        /// Response body text, or the canonical reason when the body is empty.
        message: String,
    },

    /// The request never produced a response (connection, DNS, timeout).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Returns whether the request should be attempted again.
    ///
    /// Everything except a 404 is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// HTTP status associated with this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::Http { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Returns a short explanation for the detail panel.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound => "No record exists for this student.",
            Self::Http { status, .. } if *status >= 500 => {
                "The records service reported an internal error."
            }
            Self::Http { .. } => "The records service rejected the request.",
            Self::Transport(_) => "Could not reach the records service.",
            Self::Decode(_) => "The records service returned data that could not be read.",
        }
    }
}
