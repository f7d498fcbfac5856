//! Centralized constants for the App Runner stack workspace.
//!
//! This module contains default values and validation bounds used across
//! crates to avoid magic number duplication and improve maintainability.

// =============================================================================
// Network Defaults
// =============================================================================

/// Default VPC CIDR block.
pub const DEFAULT_VPC_CIDR_BLOCK: &str = "10.0.0.0/16";

/// Default number of availability zones to spread subnets across.
pub const DEFAULT_VPC_MAX_AZS: u32 = 3;

/// Default CIDR mask for both the private and public subnet tiers.
pub const DEFAULT_SUBNET_CIDR_MASK: u8 = 24;

// =============================================================================
// Network Bounds
// =============================================================================

/// Smallest allowed VPC/subnet prefix length.
pub const MIN_CIDR_PREFIX: u8 = 16;

/// Largest allowed VPC/subnet prefix length.
pub const MAX_CIDR_PREFIX: u8 = 28;

/// Maximum number of availability zones a plan may span.
pub const MAX_VPC_MAX_AZS: u32 = 6;

// =============================================================================
// Database Defaults
// =============================================================================

/// Default MySQL engine version.
pub const DEFAULT_DB_ENGINE_VERSION: &str = "8.0";

/// Default database instance class (burstable, development-sized).
pub const DEFAULT_DB_INSTANCE_CLASS: &str = "db.t3.micro";

/// Default allocated storage in GiB.
pub const DEFAULT_DB_ALLOCATED_STORAGE_GIB: u32 = 20;

/// Default database name.
pub const DEFAULT_DB_NAME: &str = "apprunner";

/// Default MySQL listener port.
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Default backup retention in days.
pub const DEFAULT_DB_BACKUP_RETENTION_DAYS: u32 = 5;

/// Default master username for the generated credentials secret.
pub const DEFAULT_DB_MASTER_USERNAME: &str = "apprunner";

/// Default name under which the generated database credentials are stored.
pub const DEFAULT_DB_CREDENTIALS_SECRET_NAME: &str = "rds/dev/apprunner/mysql";

// =============================================================================
// Database Bounds
// =============================================================================

/// Minimum allocated storage in GiB.
pub const MIN_DB_ALLOCATED_STORAGE_GIB: u32 = 20;

/// Maximum allocated storage in GiB.
pub const MAX_DB_ALLOCATED_STORAGE_GIB: u32 = 65536;

/// Maximum backup retention in days.
pub const MAX_DB_BACKUP_RETENTION_DAYS: u32 = 35;

/// Maximum length of a database name.
pub const MAX_DB_NAME_LEN: usize = 64;

// =============================================================================
// Registry Defaults
// =============================================================================

/// Default container image repository name.
pub const DEFAULT_ECR_REPOSITORY_NAME: &str = "apprunner";

/// Default image tag to deploy.
pub const DEFAULT_ECR_IMAGE_TAG: &str = "latest";

// =============================================================================
// Service Defaults
// =============================================================================

/// Default App Runner service name.
pub const DEFAULT_SERVICE_NAME: &str = "apprunner";

/// Default CPU allocation for a service instance.
pub const DEFAULT_SERVICE_CPU: &str = "1 vCPU";

/// Default memory allocation for a service instance.
pub const DEFAULT_SERVICE_MEMORY: &str = "2 GB";

/// Default port the container listens on.
pub const DEFAULT_SERVICE_PORT: u16 = 80;

/// Default health check timeout in seconds.
pub const DEFAULT_HEALTH_CHECK_TIMEOUT_SECS: u32 = 3;

/// Default health check interval in seconds.
pub const DEFAULT_HEALTH_CHECK_INTERVAL_SECS: u32 = 5;

/// Default number of consecutive failed checks before marking unhealthy.
pub const DEFAULT_UNHEALTHY_THRESHOLD: u32 = 3;

/// Default number of consecutive successful checks before marking healthy.
pub const DEFAULT_HEALTHY_THRESHOLD: u32 = 1;

// =============================================================================
// Service Bounds
// =============================================================================

/// Minimum value for health check timings and thresholds.
pub const MIN_HEALTH_CHECK_VALUE: u32 = 1;

/// Maximum value for health check timings and thresholds.
pub const MAX_HEALTH_CHECK_VALUE: u32 = 20;

/// CPU allocations the hosting service accepts.
pub const ALLOWED_SERVICE_CPU: &[&str] =
    &["0.25 vCPU", "0.5 vCPU", "1 vCPU", "2 vCPU", "4 vCPU"];

/// Memory allocations the hosting service accepts.
pub const ALLOWED_SERVICE_MEMORY: &[&str] = &[
    "0.5 GB", "1 GB", "2 GB", "3 GB", "4 GB", "6 GB", "8 GB", "10 GB", "12 GB",
];
