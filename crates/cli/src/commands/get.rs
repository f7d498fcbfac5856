//! Single-accessor lookup command.

use anyhow::Result;
use apprunner_config::{ConfigResolver, env_key};

use crate::error::ExitCode;

/// Print the raw value an accessor resolves to.
///
/// An unset key is not an error: the value is simply absent, and the
/// distinct exit code lets scripts branch on it.
pub fn run(resolver: &ConfigResolver, accessor: &str) -> Result<ExitCode> {
    match resolver.resolve(accessor) {
        Some(value) => {
            println!("{value}");
            Ok(ExitCode::Success)
        }
        None => {
            eprintln!("{} is unset", env_key(accessor));
            Ok(ExitCode::UnsetKey)
        }
    }
}
