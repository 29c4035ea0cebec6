//! HTTP access to the student records API.

use std::future::Future;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use srl_model::FetchError;

use crate::config::ApiConfig;
use crate::error::ConfigError;

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("student-record-lookup/", env!("CARGO_PKG_VERSION"));

/// A source of JSON documents addressed by URL.
///
/// The fetcher only needs `GET url -> JSON`; tests substitute a scripted
/// implementation.
pub trait StudentApi: Send + Sync + 'static {
    /// GET `url` and decode the body as JSON.
    ///
    /// A 404 must be reported as [`FetchError::NotFound`].
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// [`StudentApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    client: reqwest::Client,
}

impl HttpStudentApi {
    /// Creates a client using the configured request timeout.
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Maps the response status and decodes the body.
    async fn handle_response(response: Response) -> Result<Value, FetchError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match body.trim() {
                "" => status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
                text => text.to_string(),
            };
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode(e.to_string())
            } else {
                FetchError::Transport(e.to_string())
            }
        })
    }
}

impl StudentApi for HttpStudentApi {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::trace!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ApiConfig::new("http://localhost:8080").unwrap();
        assert!(HttpStudentApi::new(&config).is_ok());
    }
}
