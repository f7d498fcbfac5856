//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   failure modes.
//! - Map ConfigError values to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use apprunner_config::ConfigError;

/// Structured exit codes for apprunner-cli.
///
/// These codes let scripts distinguish between failure modes: retry makes
/// no sense for an invalid configuration, and an unset key is often an
/// expected branch rather than a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Invalid configuration - a setting failed coercion or validation, or
    /// the env file could not be loaded.
    ///
    /// Scripts should fix the environment and not retry as-is.
    InvalidConfig = 2,

    /// Unset key - `get` found no value for the derived key.
    ///
    /// Scripts can branch on this to supply their own default.
    UnsetKey = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait mapping errors to exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self.downcast_ref::<ConfigError>().is_some() {
            ExitCode::InvalidConfig
        } else {
            ExitCode::GeneralError
        }
    }
}
