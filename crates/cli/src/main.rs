//! AppRunner CLI - Render and inspect deployment configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Capture the environment snapshot (with optional `.env` / `--env-file`)
//!   once, before any command runs.
//! - Dispatch to subcommands and translate failures into structured exit
//!   codes.
//!
//! Does NOT handle:
//! - Settings resolution or validation logic (see `crates/config`).
//! - Provisioning: output is input for external tooling.
//!
//! Invariants:
//! - The snapshot is captured exactly once per process; every command reads
//!   through the same resolver.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;

use apprunner_config::ConfigResolver;
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let resolver = match build_resolver(&cli) {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("Failed to load environment: {e}");
            std::process::exit(ExitCode::InvalidConfig.as_i32());
        }
    };

    let exit_code = match run_command(cli, &resolver) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Capture the environment snapshot, honoring `--env-file` when given.
fn build_resolver(cli: &Cli) -> Result<ConfigResolver, apprunner_config::ConfigError> {
    match cli.env_file {
        Some(ref path) => ConfigResolver::with_env_file(path),
        None => ConfigResolver::from_process_env(),
    }
}
