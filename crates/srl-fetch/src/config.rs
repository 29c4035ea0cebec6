//! API configuration.

use std::time::Duration;

use reqwest::Url;
use srl_model::EndpointRegistry;

use crate::error::ConfigError;
use crate::retry::RetryPolicy;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "STUDENT_API_BASE_URL";

/// Base URL used when [`BASE_URL_ENV`] is unset or blank.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How long a settled result is served from the cache.
pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(5 * 60);

/// Settings for talking to the student records API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme and host (and optional path prefix), without a trailing slash.
    pub base_url: String,
    pub request_timeout: Duration,
    pub freshness: Duration,
    pub retry: RetryPolicy,
    /// Fetch the extended categories as well as the core ones.
    pub include_extended: bool,
}

impl ApiConfig {
    /// Configuration for `base_url` with default timings.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: validate_base_url(base_url)?,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            freshness: DEFAULT_FRESHNESS,
            retry: RetryPolicy::default(),
            include_extended: true,
        })
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_freshness(mut self, freshness: Duration) -> Self {
        self.freshness = freshness;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn with_extended(mut self, include_extended: bool) -> Self {
        self.include_extended = include_extended;
        self
    }

    /// Categories a lookup fetches under this configuration.
    #[must_use]
    pub fn registry(&self) -> EndpointRegistry {
        if self.include_extended {
            EndpointRegistry::extended()
        } else {
            EndpointRegistry::standard()
        }
    }
}

fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed"));
    }

    Ok(trimmed.to_string())
}
