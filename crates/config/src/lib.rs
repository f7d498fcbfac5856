//! Configuration management for the App Runner deployment stacks.
//!
//! This crate provides the environment snapshot, the accessor-name to
//! environment-key derivation, and the typed stack settings resolved from
//! environment variables and an optional `.env` file.

pub mod constants;
mod error;
mod key;
mod resolver;
mod snapshot;
pub mod types;

pub use error::ConfigError;
pub use key::env_key;
pub use resolver::ConfigResolver;
pub use snapshot::EnvSnapshot;
pub use types::{
    DatabaseSettings, DeploymentPlan, DeploymentTarget, HealthCheckProtocol, HealthCheckSettings,
    NetworkSettings, RegistrySettings, ServiceSettings,
};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
