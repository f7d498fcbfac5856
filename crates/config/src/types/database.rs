//! Database stack settings.
//!
//! Responsibilities:
//! - Define the managed MySQL instance settings.
//! - Validate storage, retention, port, and database-name constraints.
//!
//! Does NOT handle:
//! - Secret values: only the *name* of the generated credentials secret
//!   passes through this layer.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DB_ALLOCATED_STORAGE_GIB, DEFAULT_DB_BACKUP_RETENTION_DAYS,
    DEFAULT_DB_CREDENTIALS_SECRET_NAME, DEFAULT_DB_ENGINE_VERSION, DEFAULT_DB_INSTANCE_CLASS,
    DEFAULT_DB_MASTER_USERNAME, DEFAULT_DB_NAME, DEFAULT_DB_PORT, MAX_DB_ALLOCATED_STORAGE_GIB,
    MAX_DB_BACKUP_RETENTION_DAYS, MAX_DB_NAME_LEN, MIN_DB_ALLOCATED_STORAGE_GIB,
};
use crate::error::ConfigError;
use crate::resolver::ConfigResolver;

/// Managed relational database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// MySQL engine version (e.g. `8.0`).
    pub engine_version: String,
    /// Instance class (e.g. `db.t3.micro`).
    pub instance_class: String,
    /// Allocated storage in GiB.
    pub allocated_storage_gib: u32,
    /// Initial database name.
    pub database_name: String,
    /// Listener port; also the ingress port the network stack opens.
    pub port: u16,
    /// Whether to run a standby replica in a second availability zone.
    pub multi_az: bool,
    /// Automated backup retention in days (0 disables backups).
    pub backup_retention_days: u32,
    /// Whether storage is encrypted at rest.
    pub storage_encrypted: bool,
    /// Master username for the generated credentials secret.
    pub master_username: String,
    /// Name under which the generated credentials are stored.
    pub credentials_secret_name: String,
}

impl DatabaseSettings {
    /// Resolve the database settings, falling back to stack defaults.
    pub fn resolve(resolver: &ConfigResolver) -> Result<Self, ConfigError> {
        let settings = Self {
            engine_version: resolver
                .resolve_string("rdsEngineVersion")
                .unwrap_or_else(|| DEFAULT_DB_ENGINE_VERSION.to_string()),
            instance_class: resolver
                .resolve_string("rdsInstanceClass")
                .unwrap_or_else(|| DEFAULT_DB_INSTANCE_CLASS.to_string()),
            allocated_storage_gib: resolver
                .resolve_u32("rdsAllocatedStorage")?
                .unwrap_or(DEFAULT_DB_ALLOCATED_STORAGE_GIB),
            database_name: resolver
                .resolve_string("rdsDatabaseName")
                .unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            port: resolver.resolve_u16("rdsPort")?.unwrap_or(DEFAULT_DB_PORT),
            multi_az: resolver.resolve_bool("rdsMultiAz")?.unwrap_or(false),
            backup_retention_days: resolver
                .resolve_u32("rdsBackupRetention")?
                .unwrap_or(DEFAULT_DB_BACKUP_RETENTION_DAYS),
            storage_encrypted: resolver.resolve_bool("rdsStorageEncrypted")?.unwrap_or(true),
            master_username: resolver
                .resolve_string("rdsMasterUsername")
                .unwrap_or_else(|| DEFAULT_DB_MASTER_USERNAME.to_string()),
            credentials_secret_name: resolver
                .resolve_string("rdsCredentialsSecretName")
                .unwrap_or_else(|| DEFAULT_DB_CREDENTIALS_SECRET_NAME.to_string()),
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.allocated_storage_gib < MIN_DB_ALLOCATED_STORAGE_GIB
            || self.allocated_storage_gib > MAX_DB_ALLOCATED_STORAGE_GIB
        {
            return Err(ConfigError::InvalidDatabase {
                message: format!(
                    "allocated storage must be between {} and {} GiB (got {})",
                    MIN_DB_ALLOCATED_STORAGE_GIB,
                    MAX_DB_ALLOCATED_STORAGE_GIB,
                    self.allocated_storage_gib
                ),
            });
        }

        if self.backup_retention_days > MAX_DB_BACKUP_RETENTION_DAYS {
            return Err(ConfigError::InvalidDatabase {
                message: format!(
                    "backup retention must be at most {MAX_DB_BACKUP_RETENTION_DAYS} days (got {})",
                    self.backup_retention_days
                ),
            });
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidDatabase {
                message: "port must be greater than 0".to_string(),
            });
        }

        validate_database_name(&self.database_name)?;

        if !self.instance_class.starts_with("db.") {
            return Err(ConfigError::InvalidDatabase {
                message: format!(
                    "instance class must start with 'db.' (got '{}')",
                    self.instance_class
                ),
            });
        }

        Ok(())
    }
}

/// Validate a MySQL database name: a letter first, then letters, digits,
/// and underscores, at most `MAX_DB_NAME_LEN` characters.
fn validate_database_name(name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();

    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_is_word = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !starts_with_letter || !rest_is_word || name.len() > MAX_DB_NAME_LEN {
        return Err(ConfigError::InvalidDatabase {
            message: format!(
                "database name must start with a letter, contain only letters, digits, and \
                 underscores, and be at most {MAX_DB_NAME_LEN} characters (got '{name}')"
            ),
        });
    }

    Ok(())
}
