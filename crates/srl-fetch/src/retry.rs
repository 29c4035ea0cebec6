//! Bounded retry with exponential backoff.

use std::time::Duration;

use srl_model::FetchError;

/// How failed requests are retried.
///
/// After the `n`th consecutive failure the fetcher waits
/// `min(base_delay * 2^(n-1), max_delay)` and tries again, up to
/// `max_retries` times. Errors that are not retryable end the sequence at
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first failure.
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Retry `max_retries` times without waiting.
    #[must_use]
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Never retry.
    #[must_use]
    pub fn none() -> Self {
        Self::immediate(0)
    }

    /// Most requests a single fetch can make.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Whether to try again after `failures` consecutive failures, the last
    /// of which was `error`.
    #[must_use]
    pub fn should_retry(&self, failures: u32, error: &FetchError) -> bool {
        error.is_retryable() && failures <= self.max_retries
    }

    /// Wait before the retry that follows the `failures`th failure.
    #[must_use]
    pub fn delay_for(&self, failures: u32) -> Duration {
        let factor = 1u32
            .checked_shl(failures.saturating_sub(1))
            .unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error() -> FetchError {
        FetchError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }

    #[test]
    fn test_default_delays() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(1), Duration::from_secs(1));
        assert_eq!(policy.delay_for(2), Duration::from_secs(2));
        assert_eq!(policy.delay_for(3), Duration::from_secs(4));
        assert_eq!(policy.delay_for(5), Duration::from_secs(16));
        assert_eq!(policy.delay_for(6), Duration::from_secs(30));
        assert_eq!(policy.delay_for(40), Duration::from_secs(30));
    }

    #[test]
    fn test_three_retries_then_stop() {
        let policy = RetryPolicy::default();
        let err = server_error();
        assert!(policy.should_retry(1, &err));
        assert!(policy.should_retry(3, &err));
        assert!(!policy.should_retry(4, &err));
        assert_eq!(policy.max_attempts(), 4);
    }

    #[test]
    fn test_not_found_never_retried() {
        assert!(!RetryPolicy::default().should_retry(1, &FetchError::NotFound));
    }

    #[test]
    fn test_immediate() {
        let policy = RetryPolicy::immediate(2);
        assert_eq!(policy.delay_for(1), Duration::ZERO);
        assert!(policy.should_retry(2, &server_error()));
        assert!(!RetryPolicy::none().should_retry(1, &server_error()));
    }
}
