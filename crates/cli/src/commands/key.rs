//! Key derivation command.
//!
//! Prints the environment key an accessor derives to, without touching the
//! environment. Useful for answering "which variable do I set for this
//! setting?" from scripts and docs.

use anyhow::Result;
use apprunner_config::env_key;

use crate::error::ExitCode;

pub fn run(accessor: &str) -> Result<ExitCode> {
    println!("{}", env_key(accessor));
    Ok(ExitCode::Success)
}
