//! Application-level state.

use srl_fetch::{AggregatingFetcher, HttpStudentApi};
use srl_model::{FetchCycle, StudentId, ValidationError};

use super::view_state::{LookupState, ViewState};

/// The fetcher the application talks to the API through.
pub type Fetcher<A = HttpStudentApi> = AggregatingFetcher<A>;

/// Top-level application state.
///
/// Generic over the API so tests can run lookups against a scripted one.
pub struct AppState<A = HttpStudentApi> {
    /// Idle prompt or active lookup.
    pub view: ViewState,
    /// Text in the search box, as typed.
    pub input: String,
    /// Why the last submission was rejected.
    pub validation_error: Option<ValidationError>,
    /// Shared fetcher; clones share its cache.
    pub fetcher: Fetcher<A>,
    /// Sequence number of the most recent fetch cycle.
    pub last_sequence: u64,
    /// Whether the OS is in dark mode.
    pub system_is_dark: bool,
}

impl<A> AppState<A> {
    pub fn new(fetcher: Fetcher<A>) -> Self {
        Self {
            view: ViewState::Idle,
            input: String::new(),
            validation_error: None,
            fetcher,
            last_sequence: 0,
            system_is_dark: false,
        }
    }

    /// Allocate the next fetch cycle for `student`.
    pub fn next_cycle(&mut self, student: StudentId) -> FetchCycle {
        self.last_sequence += 1;
        FetchCycle::new(student, self.last_sequence)
    }

    pub fn lookup(&self) -> Option<&LookupState> {
        self.view.lookup()
    }

    pub fn lookup_mut(&mut self) -> Option<&mut LookupState> {
        self.view.lookup_mut()
    }

    /// The student of the active lookup.
    pub fn active_student(&self) -> Option<StudentId> {
        self.lookup().map(LookupState::student)
    }
}
