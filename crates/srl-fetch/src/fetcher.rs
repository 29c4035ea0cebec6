//! The aggregating fetcher.

use std::fmt;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::join_all;
use srl_model::{
    AggregateResult, Category, CategoryResult, EndpointRegistry, FetchCycle, FetchError, Payload,
    StudentId,
};

use crate::api::StudentApi;
use crate::cache::{FetchOutcome, QueryCache};
use crate::config::ApiConfig;
use crate::retry::RetryPolicy;

/// Path of the student collection below the base URL.
pub const STUDENTS_PATH: &str = "/api/payments/students";

/// Fetches every category of a student's records concurrently.
///
/// Each category goes through the [`QueryCache`] first and then to the
/// [`StudentApi`], retrying per the [`RetryPolicy`]. Cloning is cheap and
/// clones share the cache.
pub struct AggregatingFetcher<A> {
    api: Arc<A>,
    cache: QueryCache,
    registry: Arc<EndpointRegistry>,
    base_url: Arc<str>,
    retry: RetryPolicy,
}

impl<A> Clone for AggregatingFetcher<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            cache: self.cache.clone(),
            registry: Arc::clone(&self.registry),
            base_url: Arc::clone(&self.base_url),
            retry: self.retry,
        }
    }
}

impl<A> fmt::Debug for AggregatingFetcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregatingFetcher")
            .field("base_url", &self.base_url)
            .field("categories", &self.registry.len())
            .field("retry", &self.retry)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl<A: StudentApi> AggregatingFetcher<A> {
    pub fn new(api: A, config: &ApiConfig) -> Self {
        Self {
            api: Arc::new(api),
            cache: QueryCache::new(config.freshness),
            registry: Arc::new(config.registry()),
            base_url: Arc::from(config.base_url.trim_end_matches('/')),
            retry: config.retry,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// URL of `category` for `student`.
    ///
    /// The bare student resource has no suffix; every other category is a
    /// sub-resource of it.
    #[must_use]
    pub fn endpoint_url(&self, student: StudentId, category: Category) -> String {
        match category.path_suffix() {
            "" => format!("{}{STUDENTS_PATH}/{student}", self.base_url),
            suffix => format!("{}{STUDENTS_PATH}/{student}/{suffix}", self.base_url),
        }
    }

    /// Fetch `student`'s records, or do nothing when no student is selected.
    pub async fn fetch(&self, student: Option<StudentId>) -> Option<AggregateResult> {
        match student {
            Some(student) => Some(self.fetch_all(student).await),
            None => None,
        }
    }

    /// Fetch every registry category for `student` as a standalone cycle.
    pub async fn fetch_all(&self, student: StudentId) -> AggregateResult {
        self.fetch_cycle(FetchCycle::new(student, 0)).await
    }

    /// Fetch every registry category concurrently for `cycle`.
    pub async fn fetch_cycle(&self, cycle: FetchCycle) -> AggregateResult {
        tracing::info!(%cycle, categories = self.registry.len(), "fetching student records");

        let mut aggregate = AggregateResult::loading(cycle, &self.registry);
        let results = join_all(self.registry.iter().map(|category| async move {
            (category, self.fetch_category(cycle.student, category).await)
        }))
        .await;

        for (category, result) in results {
            aggregate.apply(cycle, category, result);
        }

        let counts = aggregate.counts();
        tracing::info!(
            %cycle,
            success = counts.success,
            empty = counts.empty,
            not_found = counts.not_found,
            error = counts.error,
            "student records fetched"
        );
        aggregate
    }

    /// Fetch one category, from the cache when fresh.
    pub async fn fetch_category(&self, student: StudentId, category: Category) -> CategoryResult {
        let key = category.descriptor().cache_key(student);

        if let Some(payload) = self.cache.lookup_fresh(&key) {
            tracing::debug!(%key, "cache hit");
            return CategoryResult::from_outcome(Ok(payload), 0);
        }

        let api = Arc::clone(&self.api);
        let url = self.endpoint_url(student, category);
        let retry = self.retry;
        let FetchOutcome { outcome, attempts } = self
            .cache
            .join_or_start(key, move || request_with_retry(api, url, retry).boxed())
            .await;

        CategoryResult::from_outcome(outcome, attempts)
    }

    /// Drop cached results for `student` so the next fetch hits the API.
    pub fn invalidate(&self, student: StudentId) {
        self.cache.invalidate_student(student);
    }

    /// Drop every cached result.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

/// GET `url` until it succeeds, is not found, or the retry budget runs out.
async fn request_with_retry<A: StudentApi>(
    api: Arc<A>,
    url: String,
    retry: RetryPolicy,
) -> FetchOutcome {
    let mut failures = 0;
    loop {
        let attempt = failures + 1;
        tracing::debug!(url = %url, attempt, "requesting");

        let error = match api.get_json(&url).await {
            Ok(value) => {
                return FetchOutcome {
                    outcome: Ok(Payload::from_json(value)),
                    attempts: attempt,
                };
            }
            Err(FetchError::NotFound) => {
                tracing::debug!(url = %url, "record not found");
                return FetchOutcome {
                    outcome: Ok(Payload::NotFound),
                    attempts: attempt,
                };
            }
            Err(error) => error,
        };

        failures = attempt;
        if !retry.should_retry(failures, &error) {
            tracing::warn!(url = %url, attempts = failures, %error, "request failed");
            return FetchOutcome {
                outcome: Err(error),
                attempts: failures,
            };
        }

        let delay = retry.delay_for(failures);
        tracing::warn!(
            url = %url,
            attempt,
            %error,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "request failed, retrying"
        );
        tokio::time::sleep(delay).await;
    }
}
