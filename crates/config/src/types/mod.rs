//! Typed settings for the deployment stacks.
//!
//! Responsibilities:
//! - Define the setting groups for the network, database, registry, and
//!   hosting-service stacks, plus the deployment target.
//! - Resolve each group through the [`ConfigResolver`](crate::ConfigResolver)
//!   with stack defaults, and validate the result.
//!
//! Does NOT handle:
//! - Environment capture or key derivation (see the crate root modules).
//! - Provisioning: these are inputs to external tooling, nothing here talks
//!   to a cloud API.
//!
//! Invariants:
//! - Unset settings fall back to the stack defaults in `constants.rs`.
//! - Validation runs on every resolve; a plan that resolves is a plan that
//!   passed its bounds checks.

mod database;
mod network;
mod plan;
mod registry;
mod service;
mod target;

pub use database::DatabaseSettings;
pub use network::NetworkSettings;
pub use plan::DeploymentPlan;
pub use registry::RegistrySettings;
pub use service::{HealthCheckProtocol, HealthCheckSettings, ServiceSettings};
pub use target::DeploymentTarget;
