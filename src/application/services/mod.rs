//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (IdGenerator) but are themselves
//! concrete structs, not traits.

mod calculator;

pub use calculator::{CalculatorService, FormEvent};
