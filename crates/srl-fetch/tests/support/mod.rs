//! Scripted in-memory API for fetcher tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;
use srl_fetch::StudentApi;
use srl_model::FetchError;

pub const BASE_URL: &str = "http://records.test";

/// A canned response.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
}

#[derive(Default)]
struct Script {
    replies: HashMap<String, VecDeque<Reply>>,
    calls: HashMap<String, u32>,
}

/// Answers each URL from a queue of replies. The last reply in a queue
/// repeats; unscripted URLs answer 404.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    script: Arc<Mutex<Script>>,
    latency: Duration,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every reply by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn reply(self, url: &str, replies: impl IntoIterator<Item = Reply>) -> Self {
        self.script
            .lock()
            .unwrap()
            .replies
            .insert(url.to_string(), replies.into_iter().collect());
        self
    }

    pub fn calls(&self, url: &str) -> u32 {
        self.script
            .lock()
            .unwrap()
            .calls
            .get(url)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> u32 {
        self.script.lock().unwrap().calls.values().sum()
    }

    fn next_reply(&self, url: &str) -> Reply {
        let mut script = self.script.lock().unwrap();
        *script.calls.entry(url.to_string()).or_default() += 1;
        match script.replies.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap_or(Reply::Status(404)),
            None => Reply::Status(404),
        }
    }
}

impl StudentApi for ScriptedApi {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let reply = self.next_reply(url);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match reply {
            Reply::Json(value) => Ok(value),
            Reply::Status(404) => Err(FetchError::NotFound),
            Reply::Status(status) => Err(FetchError::Http {
                status,
                message: "Internal Server Error".to_string(),
            }),
        }
    }
}

pub fn url(id: u64, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("{BASE_URL}/api/payments/students/{id}")
    } else {
        format!("{BASE_URL}/api/payments/students/{id}/{suffix}")
    }
}
