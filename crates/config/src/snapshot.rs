//! Environment snapshot capture.
//!
//! Responsibilities:
//! - Load the optional `.env` file into the process environment without
//!   overriding pre-existing variables.
//! - Capture the process environment into an immutable key/value map.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv
//!   loading in tests.
//!
//! Does NOT handle:
//! - Accessor-name derivation or lookups (see `key.rs` and `resolver.rs`).
//!
//! Invariants / Assumptions:
//! - The snapshot is immutable after capture; repeated lookups for the same
//!   key return the same value for the lifetime of the process.
//! - Capture happens once at process start; later mutations of the process
//!   environment are not reflected.
//! - A variable already present in the ambient environment always wins over
//!   the `.env` file value for the same key.

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;

/// An immutable capture of the process environment, merged with an optional
/// `.env` file.
///
/// Capture once at process start and share by reference; lookups are plain
/// map reads and safe for concurrent use.
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the environment after loading the default `.env` file.
    ///
    /// The `.env` file is discovered in the current directory or its
    /// ancestors. A missing file is silently ignored; the snapshot then
    /// holds only ambient variables. File values never override variables
    /// that are already set.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or
    /// "1", the `.env` file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read
    /// (`ConfigError::DotenvIo`).
    ///
    /// SAFETY: Error values never include raw .env line contents to prevent
    /// secret leakage.
    pub fn capture() -> Result<Self, ConfigError> {
        if !Self::dotenv_disabled() {
            match dotenvy::dotenv() {
                Ok(path) => {
                    tracing::debug!(path = %path.display(), "loaded .env file");
                }
                Err(e) if Self::is_not_found(&e) => {}
                Err(e) => return Err(Self::map_dotenv_error(e)),
            }
        }

        Ok(Self::capture_ambient())
    }

    /// Capture the environment after loading an explicitly named env file.
    ///
    /// Unlike [`EnvSnapshot::capture`], a missing file is an error: the
    /// operator asked for this specific file. The `DOTENV_DISABLED` gate
    /// does not apply. File values never override variables that are
    /// already set.
    pub fn capture_with_env_file(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::from_path(path).map_err(Self::map_dotenv_error)?;
        tracing::debug!(path = %path.display(), "loaded env file");

        Ok(Self::capture_ambient())
    }

    fn capture_ambient() -> Self {
        // Non-UTF8 entries cannot hold settings; skip them.
        let vars: HashMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();

        tracing::debug!(count = vars.len(), "captured environment snapshot");
        Self { vars }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    fn map_dotenv_error(err: dotenvy::Error) -> ConfigError {
        match err {
            dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }

    /// Look up a key in the snapshot.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of captured variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    /// Build a snapshot from explicit pairs, bypassing the process
    /// environment entirely. Intended for tests and embedding.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
