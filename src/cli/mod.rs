//! CLI layer: argument parsing, command dispatch and the interactive session

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod render;
pub mod session;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};
