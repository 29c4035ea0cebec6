//! Views for Student Record Lookup.
//!
//! Views are pure functions of state. The text they show is computed by the
//! plain functions in [`detail`] and [`categories`] so it can be tested
//! without rendering.

pub mod categories;
pub mod detail;
pub mod search;

pub use search::view_search;
