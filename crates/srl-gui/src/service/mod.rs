//! Background services.
//!
//! Async work exposed as `Task`s using Iced's `Task::perform` pattern.

pub mod lookup;
