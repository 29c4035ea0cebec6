//! Student lookup service.
//!
//! A lookup is one fetch cycle: a batch of independent tasks, one per
//! record category, each producing a [`Message::CategoryResolved`].

use iced::Task;
use srl_fetch::StudentApi;
use srl_model::{AggregateResult, Category, FetchCycle, StudentId};

use crate::message::Message;
use crate::state::{AppState, Fetcher, LookupState, ViewState};

/// Start a new fetch cycle for `student` and make it the active lookup.
///
/// Every category starts out loading; results of earlier cycles arriving
/// later are discarded by `App::update`.
pub fn start_lookup<A: StudentApi>(
    state: &mut AppState<A>,
    student: StudentId,
    selected: Option<Category>,
) -> Task<Message> {
    let cycle = state.next_cycle(student);
    let registry = state.fetcher.registry();
    let results = AggregateResult::loading(cycle, registry);

    tracing::info!(%cycle, categories = registry.len(), "starting lookup");

    let tasks: Vec<_> = registry
        .iter()
        .map(|category| fetch_category(state.fetcher.clone(), cycle, category))
        .collect();

    state.view = ViewState::Active(LookupState::new(results, selected));
    Task::batch(tasks)
}

/// Fetch one category as part of `cycle`.
pub fn fetch_category<A: StudentApi>(
    fetcher: Fetcher<A>,
    cycle: FetchCycle,
    category: Category,
) -> Task<Message> {
    Task::perform(
        resolve_category(fetcher, cycle, category),
        std::convert::identity,
    )
}

/// The work behind [`fetch_category`]: fetch and wrap the result in the
/// message that delivers it.
pub async fn resolve_category<A: StudentApi>(
    fetcher: Fetcher<A>,
    cycle: FetchCycle,
    category: Category,
) -> Message {
    let result = fetcher.fetch_category(cycle.student, category).await;
    Message::CategoryResolved {
        cycle,
        category,
        result,
    }
}
