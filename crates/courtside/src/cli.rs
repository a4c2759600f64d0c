//! Command-line interface for courtside.

use crate::report::OutputFormat;
use clap::{Parser, Subcommand};

/// Courtside - score checking for recorded club matches
#[derive(Parser, Debug)]
#[command(name = "courtside")]
#[command(about = "Validate tennis set scores and resolve match winners", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a single set score
    Set {
        /// Games won by side A
        #[arg(allow_negative_numbers = true)]
        games_a: i32,

        /// Games won by side B
        #[arg(allow_negative_numbers = true)]
        games_b: i32,

        /// Judge the score as a 10-point super-tiebreak
        #[arg(long)]
        super_tiebreak: bool,
    },

    /// Score a whole match, e.g. `courtside match 6-4 4-6 10-8`
    Match {
        /// Sets in games-games notation
        #[arg(required = true, allow_hyphen_values = true)]
        sets: Vec<String>,
    },

    /// Audit a TOML ledger of recorded matches
    Audit {
        /// Path to the ledger file
        ledger: std::path::PathBuf,

        /// Report findings without failing
        #[arg(long)]
        lenient: bool,
    },

    /// Print the JSON schema of the ledger file format
    Schema,
}
