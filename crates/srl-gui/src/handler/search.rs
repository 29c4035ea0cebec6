//! Search view message handler.
//!
//! Handles:
//! - Input editing and submission (validation, new fetch cycle)
//! - Category selection
//! - Refresh, per-category retry and clearing

use iced::Task;
use srl_fetch::StudentApi;
use srl_model::{Category, CategoryResult, StudentId};

use super::MessageHandler;
use crate::message::{Message, SearchMessage};
use crate::service::lookup;
use crate::state::{AppState, ViewState};

/// Handler for search view messages.
pub struct SearchHandler;

impl MessageHandler<SearchMessage> for SearchHandler {
    fn handle<A: StudentApi>(&self, state: &mut AppState<A>, msg: SearchMessage) -> Task<Message> {
        match msg {
            SearchMessage::InputChanged(value) => {
                state.input = value;
                state.validation_error = None;
                Task::none()
            }

            SearchMessage::Submitted => submit(state),

            SearchMessage::CategorySelected(category) => {
                if let Some(lookup) = state.lookup_mut() {
                    lookup.selected = Some(category);
                }
                Task::none()
            }

            SearchMessage::Refresh => refresh(state),

            SearchMessage::RetryCategory(category) => retry(state, category),

            SearchMessage::Clear => {
                state.view = ViewState::Idle;
                state.input.clear();
                state.validation_error = None;
                Task::none()
            }
        }
    }
}

/// Validate the input and start a fresh lookup.
///
/// Every valid submission starts a new cycle with no category selected,
/// even when the ID is unchanged.
fn submit<A: StudentApi>(state: &mut AppState<A>) -> Task<Message> {
    match StudentId::parse(&state.input) {
        Ok(student) => {
            state.validation_error = None;
            lookup::start_lookup(state, student, None)
        }
        Err(err) => {
            tracing::debug!(input = %state.input, %err, "student ID rejected");
            state.validation_error = Some(err);
            Task::none()
        }
    }
}

/// Refetch the active student, bypassing the cache and keeping the
/// selection.
fn refresh<A: StudentApi>(state: &mut AppState<A>) -> Task<Message> {
    let Some(lookup) = state.lookup() else {
        return Task::none();
    };
    let student = lookup.student();
    let selected = lookup.selected;

    state.fetcher.invalidate(student);
    lookup::start_lookup(state, student, selected)
}

/// Refetch one failed category within the current cycle.
fn retry<A: StudentApi>(state: &mut AppState<A>, category: Category) -> Task<Message> {
    let fetcher = state.fetcher.clone();
    let Some(lookup) = state.lookup_mut() else {
        return Task::none();
    };
    if !lookup.results.get(category).is_some_and(CategoryResult::is_error) {
        return Task::none();
    }

    let cycle = lookup.cycle();
    lookup
        .results
        .apply(cycle, category, CategoryResult::Loading);
    tracing::info!(%cycle, category = category.key(), "retrying category");
    lookup::fetch_category(fetcher, cycle, category)
}
