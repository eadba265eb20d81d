//! paysplit: revenue split calculator
//!
//! Line items (man-units) and a flat adjustment go in; the tax-inclusive total,
//! the partner's share and the remaining payout come out, formatted as yen.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
