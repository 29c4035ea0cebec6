//! Domain model for Student Record Lookup.
//!
//! This crate holds the types shared by the fetcher and the GUI:
//!
//! - **Identifiers**: [`StudentId`] and the input validation that produces it
//! - **Endpoint Registry**: the static table of record [`Category`] values
//!   and their [`EndpointDescriptor`]s
//! - **Results**: [`CategoryResult`] per category and the [`AggregateResult`]
//!   for one [`FetchCycle`]
//! - **Errors**: [`ValidationError`] and [`FetchError`]
//!
//! Nothing here performs I/O. The HTTP side lives in `srl-fetch`.

pub mod error;
pub mod registry;
pub mod result;
pub mod student;

pub use error::{FetchError, ValidationError};
pub use registry::{CacheKey, Category, EndpointDescriptor, EndpointRegistry, UnknownCategory};
pub use result::{
    AggregateResult, CategoryResult, CategoryStatus, FetchCycle, Payload, StatusCounts,
};
pub use student::StudentId;
