//! Student Record Lookup - GUI Library
//!
//! Core application types for the Student Record Lookup desktop application:
//! type a student ID, fetch every record category concurrently, and inspect
//! each category's result.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod logging;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

pub use app::{App, run};
pub use error::StartupError;
