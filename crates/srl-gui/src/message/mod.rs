//! Message module for Student Record Lookup.
//!
//! All user interactions and system events are represented as variants of
//! [`Message`]; `App::update` processes them.

pub mod search;

use iced::keyboard;
use srl_model::{Category, CategoryResult, FetchCycle};

pub use search::SearchMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Search form, category buttons and detail panel actions
    Search(SearchMessage),

    // =========================================================================
    // Background results
    // =========================================================================
    /// One category of a fetch cycle settled.
    CategoryResolved {
        cycle: FetchCycle,
        category: Category,
        result: CategoryResult,
    },

    // =========================================================================
    // Global events
    // =========================================================================
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// System theme changed (light/dark mode)
    SystemThemeChanged(iced::theme::Mode),

    /// No operation
    Noop,
}
