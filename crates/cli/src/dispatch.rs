//! Command dispatch.

use anyhow::Result;
use apprunner_config::ConfigResolver;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Execute the selected subcommand against the shared resolver.
pub fn run_command(cli: Cli, resolver: &ConfigResolver) -> Result<ExitCode> {
    match cli.command {
        Commands::Plan {
            format,
            output_file,
        } => commands::plan::run(resolver, format, output_file.as_deref()),
        Commands::Get { accessor } => commands::get::run(resolver, &accessor),
        Commands::Key { accessor } => commands::key::run(&accessor),
        Commands::Check => commands::check::run(resolver),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}
