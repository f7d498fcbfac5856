//! Shell completion generation command.
//!
//! Responsibilities:
//! - Generate shell completion scripts for various shells (bash, zsh, fish, powershell, elvish).
//!
//! Does NOT handle:
//! - Direct installation of completions (user must redirect output to appropriate location).
//!
//! Invariants:
//! - Output is always written to stdout.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

use crate::error::ExitCode;

/// Generate shell completions for the specified shell.
pub fn run(shell: Shell) -> Result<ExitCode> {
    let mut cmd = crate::args::Cli::command();
    generate(shell, &mut cmd, "apprunner-cli", &mut io::stdout());
    Ok(ExitCode::Success)
}
