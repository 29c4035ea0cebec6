//! Search view messages.

use srl_model::Category;

/// Messages from the search form, the category buttons and the detail panel.
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// Search box text changed
    InputChanged(String),
    /// Enter pressed or Search clicked
    Submitted,
    /// Category button clicked
    CategorySelected(Category),
    /// Refetch every category of the active student, bypassing the cache
    Refresh,
    /// Refetch one failed category
    RetryCategory(Category),
    /// Back to the idle prompt
    Clear,
}
