//! Record fetching for Student Record Lookup.
//!
//! One HTTP GET per record category, issued concurrently, normalized into
//! [`CategoryResult`](srl_model::CategoryResult)s and gathered into an
//! [`AggregateResult`](srl_model::AggregateResult).
//!
//! # Architecture
//!
//! ```text
//! AggregatingFetcher
//!   ├── QueryCache      fresh results + in-flight dedup
//!   ├── RetryPolicy     bounded exponential backoff
//!   └── StudentApi      GET url -> JSON (HttpStudentApi in production)
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod retry;

pub use api::{HttpStudentApi, StudentApi};
pub use cache::{FetchOutcome, QueryCache};
pub use config::{
    ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_FRESHNESS, DEFAULT_REQUEST_TIMEOUT,
};
pub use error::ConfigError;
pub use fetcher::{AggregatingFetcher, STUDENTS_PATH};
pub use retry::RetryPolicy;
