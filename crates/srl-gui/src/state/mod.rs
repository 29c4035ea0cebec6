//! Application state.
//!
//! - [`AppState`]: root of all state, owned by the `App`
//! - [`ViewState`]: idle prompt or an active lookup with its UI state

mod app_state;
mod view_state;

pub use app_state::{AppState, Fetcher};
pub use view_state::{LookupState, ViewState};
