//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type, and
//! `App::update()` dispatches to it:
//!
//! ```ignore
//! Message::Search(msg) => SearchHandler.handle(&mut self.state, msg),
//! ```

mod search;

use iced::Task;
use srl_fetch::StudentApi;

use crate::message::Message;
use crate::state::AppState;

pub use search::SearchHandler;

/// Trait for handling messages in the Iced architecture.
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, mutating state and returning any follow-up task.
    fn handle<A: StudentApi>(&self, state: &mut AppState<A>, msg: M) -> Task<Message>;
}
