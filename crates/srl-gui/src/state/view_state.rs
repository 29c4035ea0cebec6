//! View state - current view and associated UI state.
//!
//! The active lookup owns its results and its selected category, so
//! replacing the lookup also clears the selection.

use srl_model::{AggregateResult, Category, CategoryResult, FetchCycle, StudentId};

/// Current view and its associated UI state.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    /// No student searched yet: input and prompt only.
    #[default]
    Idle,

    /// A student is being (or has been) looked up.
    Active(LookupState),
}

/// An active lookup.
#[derive(Debug, Clone)]
pub struct LookupState {
    /// Per-category results of the current fetch cycle.
    pub results: AggregateResult,
    /// Category shown in the detail panel.
    pub selected: Option<Category>,
}

impl LookupState {
    pub fn new(results: AggregateResult, selected: Option<Category>) -> Self {
        Self { results, selected }
    }

    pub fn cycle(&self) -> FetchCycle {
        self.results.cycle()
    }

    pub fn student(&self) -> StudentId {
        self.results.student()
    }

    /// The selected category and its result.
    pub fn selection(&self) -> Option<(Category, &CategoryResult)> {
        let category = self.selected?;
        self.results.get(category).map(|result| (category, result))
    }
}

impl ViewState {
    pub fn lookup(&self) -> Option<&LookupState> {
        match self {
            Self::Active(lookup) => Some(lookup),
            Self::Idle => None,
        }
    }

    pub fn lookup_mut(&mut self) -> Option<&mut LookupState> {
        match self {
            Self::Active(lookup) => Some(lookup),
            Self::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
