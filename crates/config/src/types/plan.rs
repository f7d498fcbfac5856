//! The assembled deployment plan.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::resolver::ConfigResolver;
use crate::types::database::DatabaseSettings;
use crate::types::network::NetworkSettings;
use crate::types::registry::RegistrySettings;
use crate::types::service::ServiceSettings;
use crate::types::target::DeploymentTarget;

/// All resolved settings for one deployment, in stack dependency order:
/// the network carries the database, the registry feeds the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentPlan {
    pub target: DeploymentTarget,
    pub network: NetworkSettings,
    pub database: DatabaseSettings,
    pub registry: RegistrySettings,
    pub service: ServiceSettings,
}

impl DeploymentPlan {
    /// Resolve every setting group against the resolver.
    ///
    /// Groups resolve in dependency order; the first resolution or
    /// validation failure aborts the plan.
    pub fn resolve(resolver: &ConfigResolver) -> Result<Self, ConfigError> {
        Ok(Self {
            target: DeploymentTarget::resolve(resolver)?,
            network: NetworkSettings::resolve(resolver)?,
            database: DatabaseSettings::resolve(resolver)?,
            registry: RegistrySettings::resolve(resolver)?,
            service: ServiceSettings::resolve(resolver)?,
        })
    }

    /// The fully qualified image identifier the service deploys, when the
    /// target is complete.
    pub fn image_identifier(&self) -> Option<String> {
        self.registry.image_identifier(&self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::EnvSnapshot;

    fn resolver(pairs: &[(&str, &str)]) -> ConfigResolver {
        ConfigResolver::new(EnvSnapshot::from_iter(pairs.iter().copied()))
    }

    #[test]
    fn test_plan_resolves_entirely_from_defaults() {
        let plan = DeploymentPlan::resolve(&resolver(&[])).unwrap();

        assert_eq!(plan.network.vpc_cidr_block, "10.0.0.0/16");
        assert_eq!(plan.database.port, 3306);
        assert_eq!(plan.registry.image_tag, "latest");
        assert_eq!(plan.service.cpu, "1 vCPU");
        assert_eq!(plan.image_identifier(), None);
    }

    #[test]
    fn test_plan_image_identifier_with_target() {
        let plan = DeploymentPlan::resolve(&resolver(&[
            ("ACCOUNT_ID", "651706758333"),
            ("REGION", "us-east-1"),
            ("ECR_IMAGE_TAG", "v7"),
        ]))
        .unwrap();

        assert_eq!(
            plan.image_identifier().as_deref(),
            Some("651706758333.dkr.ecr.us-east-1.amazonaws.com/apprunner:v7")
        );
    }

    #[test]
    fn test_plan_aborts_on_first_invalid_group() {
        let result = DeploymentPlan::resolve(&resolver(&[
            ("VPC_CIDR_BLOCK", "not-a-cidr"),
            ("RDS_PORT", "0"),
        ]));

        // Network resolves before database, so the CIDR error wins.
        assert!(matches!(result, Err(ConfigError::InvalidCidr { .. })));
    }

    #[test]
    fn test_plan_round_trips_through_serde() {
        let plan = DeploymentPlan::resolve(&resolver(&[
            ("ACCOUNT_ID", "651706758333"),
            ("REGION", "us-east-1"),
            ("RDS_MULTI_AZ", "true"),
        ]))
        .unwrap();

        let json = serde_json::to_string(&plan).unwrap();
        let back: DeploymentPlan = serde_json::from_str(&json).unwrap();

        assert_eq!(back.target.account, plan.target.account);
        assert_eq!(back.database.multi_az, plan.database.multi_az);
        assert_eq!(back.service.port, plan.service.port);
    }
}
