//! Application layer: services and the form view model
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod form;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use form::{FormView, Labels};
