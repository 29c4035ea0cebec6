//! In-memory API for driving lookups end to end.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use srl_fetch::StudentApi;
use srl_model::FetchError;

pub const BASE_URL: &str = "http://records.test";

#[derive(Default)]
struct Fixtures {
    replies: HashMap<String, Result<Value, FetchError>>,
    calls: u32,
}

/// Answers each URL with a fixed reply. Unknown URLs answer 404.
#[derive(Clone, Default)]
pub struct FixtureApi {
    fixtures: Arc<Mutex<Fixtures>>,
}

impl FixtureApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the reply for `url`.
    pub fn set(&self, url: &str, reply: Result<Value, FetchError>) {
        self.fixtures
            .lock()
            .unwrap()
            .replies
            .insert(url.to_string(), reply);
    }

    pub fn with(self, url: &str, reply: Result<Value, FetchError>) -> Self {
        self.set(url, reply);
        self
    }

    pub fn total_calls(&self) -> u32 {
        self.fixtures.lock().unwrap().calls
    }
}

impl StudentApi for FixtureApi {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let mut fixtures = self.fixtures.lock().unwrap();
        fixtures.calls += 1;
        fixtures
            .replies
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::NotFound))
    }
}

pub fn url(id: u64, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("{BASE_URL}/api/payments/students/{id}")
    } else {
        format!("{BASE_URL}/api/payments/students/{id}/{suffix}")
    }
}
