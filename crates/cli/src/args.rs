//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not capture the environment (see `main`).

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apprunner-cli")]
#[command(about = "Render and inspect App Runner deployment configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  apprunner-cli plan\n  apprunner-cli plan --format yaml --output-file plan.yaml\n  apprunner-cli get rdsMultiAz\n  apprunner-cli key apprunnerHealthCheckTimeout\n  apprunner-cli --env-file deploy.env check\n"
)]
pub struct Cli {
    /// Load this env file instead of discovering the default `.env`.
    ///
    /// Unlike the default `.env`, a missing file given here is an error.
    #[arg(long, global = true, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the resolved deployment plan
    Plan {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write the plan to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output_file: Option<PathBuf>,
    },

    /// Print the value an accessor resolves to
    Get {
        /// Accessor name (e.g. rdsMultiAz)
        accessor: String,
    },

    /// Print the environment key derived for an accessor, without a lookup
    Key {
        /// Accessor name (e.g. apprunnerHealthCheckTimeout)
        accessor: String,
    },

    /// Resolve and validate the full deployment plan
    Check,

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format for the rendered plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}
