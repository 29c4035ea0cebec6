//! Per-category results and their aggregation over one fetch cycle.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::FetchError;
use crate::registry::{Category, EndpointRegistry};
use crate::student::StudentId;

/// A settled, non-error response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A JSON value other than `null`.
    Found(Value),
    /// The record does not exist (404, or a `null` body).
    NotFound,
}

impl Payload {
    /// Classify a decoded JSON body. `null` means the record is absent.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::NotFound,
            other => Self::Found(other),
        }
    }
}

/// Display status of a category, the single value the view styles on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryStatus {
    Loading,
    Success,
    /// Success with an empty array.
    Empty,
    NotFound,
    Error,
}

impl CategoryStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Empty => "empty",
            Self::NotFound => "not found",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of fetching one category for one student.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CategoryResult {
    /// Request in flight, including the wait between retries.
    #[default]
    Loading,
    /// The API returned a record. Never `null`.
    Success(Value),
    /// The API has no such record. Neither a success nor an error.
    NotFound,
    /// Every attempt failed.
    Failed {
        error: FetchError,
        /// Requests made before giving up.
        attempts: u32,
    },
}

impl CategoryResult {
    /// Build a settled result from a fetch outcome.
    ///
    /// A `FetchError::NotFound` is normalized to [`CategoryResult::NotFound`]
    /// rather than reported as a failure.
    #[must_use]
    pub fn from_outcome(outcome: Result<Payload, FetchError>, attempts: u32) -> Self {
        match outcome {
            Ok(Payload::Found(value)) => Self::Success(value),
            Ok(Payload::NotFound) | Err(FetchError::NotFound) => Self::NotFound,
            Err(error) => Self::Failed { error, attempts },
        }
    }

    #[must_use]
    pub fn status(&self) -> CategoryStatus {
        match self {
            Self::Loading => CategoryStatus::Loading,
            Self::Success(Value::Array(items)) if items.is_empty() => CategoryStatus::Empty,
            Self::Success(_) => CategoryStatus::Success,
            Self::NotFound => CategoryStatus::NotFound,
            Self::Failed { .. } => CategoryStatus::Error,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Success with an empty array.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status() == CategoryStatus::Empty
    }

    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// One submission's set of concurrent requests.
///
/// The sequence number increases with every cycle the application starts,
/// so two cycles for the same student are still distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchCycle {
    pub student: StudentId,
    pub sequence: u64,
}

impl FetchCycle {
    #[must_use]
    pub fn new(student: StudentId, sequence: u64) -> Self {
        Self { student, sequence }
    }
}

impl fmt::Display for FetchCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "student {} (cycle #{})", self.student, self.sequence)
    }
}

/// Number of categories in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub loading: usize,
    pub success: usize,
    pub empty: usize,
    pub not_found: usize,
    pub error: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.loading + self.success + self.empty + self.not_found + self.error
    }

    #[must_use]
    pub fn settled(&self) -> usize {
        self.total() - self.loading
    }
}

/// Results of every category for one fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    cycle: FetchCycle,
    categories: BTreeMap<Category, CategoryResult>,
}

impl AggregateResult {
    /// A fresh aggregate with every registry category loading.
    #[must_use]
    pub fn loading(cycle: FetchCycle, registry: &EndpointRegistry) -> Self {
        Self {
            cycle,
            categories: registry
                .iter()
                .map(|category| (category, CategoryResult::Loading))
                .collect(),
        }
    }

    #[must_use]
    pub fn cycle(&self) -> FetchCycle {
        self.cycle
    }

    #[must_use]
    pub fn student(&self) -> StudentId {
        self.cycle.student
    }

    /// Record a category's result.
    ///
    /// Returns `false`, leaving the aggregate untouched, when the result
    /// belongs to another cycle or to a category this aggregate does not
    /// track.
    pub fn apply(&mut self, cycle: FetchCycle, category: Category, result: CategoryResult) -> bool {
        if cycle != self.cycle {
            return false;
        }
        match self.categories.get_mut(&category) {
            Some(slot) => {
                *slot = result;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<&CategoryResult> {
        self.categories.get(&category)
    }

    /// Categories and their results in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryResult)> {
        self.categories
            .iter()
            .map(|(category, result)| (*category, result))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Any category still in flight.
    #[must_use]
    pub fn overall_loading(&self) -> bool {
        self.categories.values().any(CategoryResult::is_loading)
    }

    /// Any category failed.
    #[must_use]
    pub fn overall_error(&self) -> bool {
        self.categories.values().any(CategoryResult::is_error)
    }

    /// Nothing in flight and nothing failed.
    #[must_use]
    pub fn overall_success(&self) -> bool {
        !self.overall_loading() && !self.overall_error()
    }

    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for result in self.categories.values() {
            match result.status() {
                CategoryStatus::Loading => counts.loading += 1,
                CategoryStatus::Success => counts.success += 1,
                CategoryStatus::Empty => counts.empty += 1,
                CategoryStatus::NotFound => counts.not_found += 1,
                CategoryStatus::Error => counts.error += 1,
            }
        }
        counts
    }
}
