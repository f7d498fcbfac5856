//! Container registry settings.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ECR_IMAGE_TAG, DEFAULT_ECR_REPOSITORY_NAME};
use crate::error::ConfigError;
use crate::resolver::ConfigResolver;
use crate::types::target::DeploymentTarget;

/// Container registry settings for the image the service deploys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Repository name within the registry.
    pub repository_name: String,
    /// Tag of the image to deploy.
    pub image_tag: String,
    /// Whether images are scanned for vulnerabilities on push.
    pub scan_image_on_push: bool,
}

impl RegistrySettings {
    /// Resolve the registry settings, falling back to stack defaults.
    pub fn resolve(resolver: &ConfigResolver) -> Result<Self, ConfigError> {
        let settings = Self {
            repository_name: resolver
                .resolve_string("ecrRepositoryName")
                .unwrap_or_else(|| DEFAULT_ECR_REPOSITORY_NAME.to_string()),
            image_tag: resolver
                .resolve_string("ecrImageTag")
                .unwrap_or_else(|| DEFAULT_ECR_IMAGE_TAG.to_string()),
            scan_image_on_push: resolver.resolve_bool("ecrScanImageOnPush")?.unwrap_or(true),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// The fully qualified image identifier for a deployment target, or
    /// `None` when the target account or region is unknown.
    pub fn image_identifier(&self, target: &DeploymentTarget) -> Option<String> {
        let account = target.account.as_deref()?;
        let region = target.region.as_deref()?;

        Some(format!(
            "{account}.dkr.ecr.{region}.amazonaws.com/{}:{}",
            self.repository_name, self.image_tag
        ))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let name = &self.repository_name;
        let name_ok = name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "._-/".contains(c))
            && !name.starts_with('/')
            && !name.ends_with('/');

        if name.len() < 2 || name.len() > 256 || !name_ok {
            return Err(ConfigError::InvalidValue {
                var: "ECR_REPOSITORY_NAME".to_string(),
                message: format!(
                    "must be 2-256 lowercase letters, digits, '.', '_', '-', or '/' (got '{name}')"
                ),
            });
        }

        let tag = &self.image_tag;
        if tag.len() > 128 || tag.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(ConfigError::InvalidValue {
                var: "ECR_IMAGE_TAG".to_string(),
                message: format!("must be at most 128 characters with no whitespace (got '{tag}')"),
            });
        }

        Ok(())
    }
}
