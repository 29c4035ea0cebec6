//! Keyboard shortcuts.
//!
//! - Escape: clear the lookup
//! - F5 / Cmd/Ctrl+R: refresh the active student

use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;
use srl_fetch::StudentApi;

use crate::app::App;
use crate::message::{Message, SearchMessage};

impl<A: StudentApi> App<A> {
    /// Handle keyboard shortcuts.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match key.as_ref() {
            keyboard::Key::Named(Named::Escape) if !self.state.view.is_idle() => {
                Task::done(Message::Search(SearchMessage::Clear))
            }

            keyboard::Key::Named(Named::F5) if !self.state.view.is_idle() => {
                Task::done(Message::Search(SearchMessage::Refresh))
            }

            keyboard::Key::Character("r") if modifiers.command() && !self.state.view.is_idle() => {
                Task::done(Message::Search(SearchMessage::Refresh))
            }

            _ => Task::none(),
        }
    }
}
