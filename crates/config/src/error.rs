//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for snapshot capture and settings resolution.
//!
//! Does NOT handle:
//! - Exit code mapping (see the CLI crate).
//!
//! Invariants:
//! - Variants that stem from a specific setting name the *derived*
//!   environment key, so the operator knows which variable to fix.
//! - Dotenv errors NEVER include raw `.env` line contents to prevent
//!   secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("invalid CIDR block: {message}")]
    InvalidCidr { message: String },

    #[error("invalid health check configuration: {message}")]
    InvalidHealthCheck { message: String },

    #[error("invalid instance size: {message}")]
    InvalidInstanceSize { message: String },

    #[error("invalid database configuration: {message}")]
    InvalidDatabase { message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
