//! Reusable UI components for Student Record Lookup.
//!
//! - **Form**: `search_box`
//! - **Display**: `status_badge`, `status_icon`
//! - **Feedback**: `EmptyState`, `LoadingState`, `ErrorState`
//! - **Icons**: Use `iced_fonts::lucide::*` directly (see <https://lucide.dev/icons/>)
//!
//! Components use the builder pattern and return `Element<M>`.

mod empty_state;
mod search_box;
mod status_badge;

pub use empty_state::{EmptyState, ErrorState, LoadingState};
pub use search_box::search_box;
pub use status_badge::{status_badge, status_icon};

pub use iced_fonts::LUCIDE_FONT_BYTES;
