//! Deployment target (account and region).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::resolver::ConfigResolver;

/// The account and region a plan deploys into.
///
/// Both are optional: a plan without a target is environment-agnostic and
/// can be rendered anywhere, but the registry image identifier cannot be
/// formed until both are known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentTarget {
    /// Twelve-digit account identifier.
    pub account: Option<String>,
    /// Region name (e.g. `us-east-1`).
    pub region: Option<String>,
}

impl DeploymentTarget {
    /// Resolve the target from `accountId` / `region` accessors.
    pub fn resolve(resolver: &ConfigResolver) -> Result<Self, ConfigError> {
        let target = Self {
            account: resolver.resolve_string("accountId"),
            region: resolver.resolve_string("region"),
        };
        target.validate()?;
        Ok(target)
    }

    /// Whether both account and region are known.
    pub fn is_complete(&self) -> bool {
        self.account.is_some() && self.region.is_some()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref account) = self.account {
            if account.len() != 12 || !account.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ConfigError::InvalidValue {
                    var: "ACCOUNT_ID".to_string(),
                    message: "must be a 12-digit account identifier".to_string(),
                });
            }
        }
        Ok(())
    }
}
