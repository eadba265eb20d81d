//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Revenue split calculator: tax-inclusive total, partner share and payout
#[derive(Parser, Debug)]
#[command(name = "paysplit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output to stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath, env = "PAYSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive form (default)
    Form,

    /// Compute once from the given line items
    Calc {
        /// Pre-tax line item in man-units (10,000 yen); repeat for more rows
        #[arg(short, long = "item", value_name = "MAN", allow_hyphen_values = true)]
        items: Vec<String>,
        /// Flat partner adjustment in man-units, as typed into the number field
        #[arg(short, long, value_name = "MAN", allow_hyphen_values = true)]
        adjustment: Option<String>,
        /// Print raw figures as TOML instead of the form
        #[arg(long)]
        toml: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template at the global path
    Init,

    /// Show config path
    Path,
}
