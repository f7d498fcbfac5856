//! Accessor resolution against the environment snapshot.
//!
//! Responsibilities:
//! - Resolve accessor names to snapshot values via the derived env key.
//! - Provide typed helpers that coerce values with useful error context.
//!
//! Does NOT handle:
//! - Snapshot capture or dotenv loading (see `snapshot.rs`).
//! - Defaults for unset settings (callers own their fallbacks).
//!
//! Invariants:
//! - `resolve` never fails: an unset or unmatchable accessor yields `None`.
//! - Raw `resolve` returns the stored value verbatim; the typed helpers
//!   treat empty or whitespace-only values as unset and trim the rest.
//! - Coercion errors name the derived environment key, not the accessor.

use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::key::env_key;
use crate::snapshot::EnvSnapshot;

/// Resolves accessor names to configuration values.
///
/// Construct one at process start (after the snapshot is captured) and pass
/// it by reference to consumers. Lookups are pure reads over the immutable
/// snapshot.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    snapshot: EnvSnapshot,
}

impl ConfigResolver {
    /// Create a resolver over an already-captured snapshot.
    pub fn new(snapshot: EnvSnapshot) -> Self {
        Self { snapshot }
    }

    /// Capture the process environment (with default `.env` discovery) and
    /// wrap it in a resolver.
    pub fn from_process_env() -> Result<Self, ConfigError> {
        Ok(Self::new(EnvSnapshot::capture()?))
    }

    /// Capture the process environment after loading an explicit env file.
    pub fn with_env_file(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(EnvSnapshot::capture_with_env_file(path)?))
    }

    /// The underlying snapshot.
    pub fn snapshot(&self) -> &EnvSnapshot {
        &self.snapshot
    }

    /// Resolve an accessor name to the raw stored value.
    ///
    /// Derives the environment key for `accessor` and looks it up in the
    /// snapshot. Returns `None` when the key is unset.
    pub fn resolve(&self, accessor: &str) -> Option<&str> {
        self.snapshot.get(&env_key(accessor))
    }

    /// Resolve an accessor to a trimmed string, treating empty or
    /// whitespace-only values as unset.
    pub fn resolve_string(&self, accessor: &str) -> Option<String> {
        self.value_or_none(&env_key(accessor)).map(str::to_string)
    }

    /// Resolve an accessor to a boolean (`true` or `false`).
    pub fn resolve_bool(&self, accessor: &str) -> Result<Option<bool>, ConfigError> {
        self.resolve_parsed(accessor, "must be true or false")
    }

    /// Resolve an accessor to a port number.
    pub fn resolve_u16(&self, accessor: &str) -> Result<Option<u16>, ConfigError> {
        self.resolve_parsed(accessor, "must be a number")
    }

    /// Resolve an accessor to an unsigned number.
    pub fn resolve_u32(&self, accessor: &str) -> Result<Option<u32>, ConfigError> {
        self.resolve_parsed(accessor, "must be a number")
    }

    /// Resolve an accessor to an unsigned 64-bit number.
    pub fn resolve_u64(&self, accessor: &str) -> Result<Option<u64>, ConfigError> {
        self.resolve_parsed(accessor, "must be a number")
    }

    /// Look up a key, returning None if unset, empty, or whitespace-only.
    /// Returns the trimmed value (leading/trailing whitespace removed).
    fn value_or_none(&self, key: &str) -> Option<&str> {
        self.snapshot.get(key).and_then(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        })
    }

    fn resolve_parsed<T: FromStr>(
        &self,
        accessor: &str,
        expected: &str,
    ) -> Result<Option<T>, ConfigError> {
        let key = env_key(accessor);
        match self.value_or_none(&key) {
            None => Ok(None),
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: key,
                    message: expected.to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(pairs: &[(&str, &str)]) -> ConfigResolver {
        ConfigResolver::new(EnvSnapshot::from_iter(pairs.iter().copied()))
    }

    #[test]
    fn test_resolve_derives_key_from_accessor() {
        let resolver = resolver(&[("APPRUNNER_SERVICE_NAME", "web")]);
        assert_eq!(resolver.resolve("apprunnerServiceName"), Some("web"));
    }

    #[test]
    fn test_resolve_unset_key_is_none() {
        let resolver = resolver(&[]);
        assert_eq!(resolver.resolve("rdsAllocatedStorage"), None);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = resolver(&[("RDS_MULTI_AZ", "true")]);
        let first = resolver.resolve("rdsMultiAz").map(str::to_string);
        let second = resolver.resolve("rdsMultiAz").map(str::to_string);
        assert_eq!(first, second);
    }

    #[test]
    fn test_raw_resolve_returns_value_verbatim() {
        let resolver = resolver(&[("ECR_IMAGE_TAG", "  v1.2  ")]);
        assert_eq!(resolver.resolve("ecrImageTag"), Some("  v1.2  "));
    }

    #[test]
    fn test_resolve_string_trims_and_filters_empty() {
        let resolver = resolver(&[
            ("ECR_IMAGE_TAG", "  v1.2  "),
            ("APPRUNNER_CPU", "   "),
            ("RDS_DATABASE_NAME", ""),
        ]);

        assert_eq!(resolver.resolve_string("ecrImageTag"), Some("v1.2".into()));
        assert_eq!(resolver.resolve_string("apprunnerCpu"), None);
        assert_eq!(resolver.resolve_string("rdsDatabaseName"), None);
    }

    #[test]
    fn test_resolve_bool() {
        let resolver = resolver(&[("RDS_MULTI_AZ", "true"), ("ECR_SCAN_IMAGE_ON_PUSH", "false")]);

        assert_eq!(resolver.resolve_bool("rdsMultiAz").unwrap(), Some(true));
        assert_eq!(
            resolver.resolve_bool("ecrScanImageOnPush").unwrap(),
            Some(false)
        );
        assert_eq!(resolver.resolve_bool("rdsStorageEncrypted").unwrap(), None);
    }

    #[test]
    fn test_invalid_bool_names_derived_key() {
        let resolver = resolver(&[("RDS_MULTI_AZ", "yes")]);

        match resolver.resolve_bool("rdsMultiAz") {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "RDS_MULTI_AZ"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_numbers() {
        let resolver = resolver(&[
            ("RDS_PORT", "3306"),
            ("RDS_ALLOCATED_STORAGE", "100"),
            ("VPC_MAX_AZS", " 2 "),
        ]);

        assert_eq!(resolver.resolve_u16("rdsPort").unwrap(), Some(3306));
        assert_eq!(
            resolver.resolve_u32("rdsAllocatedStorage").unwrap(),
            Some(100)
        );
        assert_eq!(resolver.resolve_u32("vpcMaxAzs").unwrap(), Some(2));
    }

    #[test]
    fn test_invalid_number_names_derived_key() {
        let resolver = resolver(&[("RDS_PORT", "mysql")]);

        match resolver.resolve_u16("rdsPort") {
            Err(ConfigError::InvalidValue { var, message }) => {
                assert_eq!(var, "RDS_PORT");
                assert_eq!(message, "must be a number");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_accessor_resolves_to_none_without_panicking() {
        let resolver = resolver(&[("FOO_BAR", "1")]);

        // "foo-bar" still derives FOO_BAR; a fully unmatchable name derives
        // the empty key, which is never set.
        assert_eq!(resolver.resolve("foo-bar"), Some("1"));
        assert_eq!(resolver.resolve("___"), None);
    }
}
