//! Hosting-service settings.
//!
//! Responsibilities:
//! - Define the container-hosting service settings (name, instance size,
//!   port, health check, deployment behavior).
//! - Validate instance sizes against the allowed allocations and health
//!   check values against their bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ALLOWED_SERVICE_CPU, ALLOWED_SERVICE_MEMORY, DEFAULT_HEALTH_CHECK_INTERVAL_SECS,
    DEFAULT_HEALTH_CHECK_TIMEOUT_SECS, DEFAULT_HEALTHY_THRESHOLD, DEFAULT_SERVICE_CPU,
    DEFAULT_SERVICE_MEMORY, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_PORT,
    DEFAULT_UNHEALTHY_THRESHOLD, MAX_HEALTH_CHECK_VALUE, MIN_HEALTH_CHECK_VALUE,
};
use crate::error::ConfigError;
use crate::resolver::ConfigResolver;

/// Protocol used for service health checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthCheckProtocol {
    Tcp,
    Http,
}

impl FromStr for HealthCheckProtocol {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("tcp") {
            Ok(Self::Tcp)
        } else if s.eq_ignore_ascii_case("http") {
            Ok(Self::Http)
        } else {
            Err(())
        }
    }
}

impl fmt::Display for HealthCheckProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => f.write_str("TCP"),
            Self::Http => f.write_str("HTTP"),
        }
    }
}

/// Health check settings for the hosting service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckSettings {
    pub protocol: HealthCheckProtocol,
    /// Seconds to wait for a check response.
    pub timeout_seconds: u32,
    /// Seconds between checks.
    pub interval_seconds: u32,
    /// Consecutive failures before the instance is unhealthy.
    pub unhealthy_threshold: u32,
    /// Consecutive successes before the instance is healthy.
    pub healthy_threshold: u32,
}

/// Container-hosting service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service name.
    pub service_name: String,
    /// CPU allocation per instance (e.g. `1 vCPU`).
    pub cpu: String,
    /// Memory allocation per instance (e.g. `2 GB`).
    pub memory: String,
    /// Port the container listens on.
    pub port: u16,
    /// Whether pushing a new image triggers a deployment.
    pub auto_deployments_enabled: bool,
    /// Health check configuration.
    pub health_check: HealthCheckSettings,
}

impl ServiceSettings {
    /// Resolve the service settings, falling back to stack defaults.
    pub fn resolve(resolver: &ConfigResolver) -> Result<Self, ConfigError> {
        let protocol = match resolver.resolve_string("apprunnerHealthCheckProtocol") {
            None => HealthCheckProtocol::Tcp,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: "APPRUNNER_HEALTH_CHECK_PROTOCOL".to_string(),
                message: "must be TCP or HTTP".to_string(),
            })?,
        };

        let settings = Self {
            service_name: resolver
                .resolve_string("apprunnerServiceName")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            cpu: resolver
                .resolve_string("apprunnerCpu")
                .unwrap_or_else(|| DEFAULT_SERVICE_CPU.to_string()),
            memory: resolver
                .resolve_string("apprunnerMemory")
                .unwrap_or_else(|| DEFAULT_SERVICE_MEMORY.to_string()),
            port: resolver
                .resolve_u16("apprunnerPort")?
                .unwrap_or(DEFAULT_SERVICE_PORT),
            auto_deployments_enabled: resolver
                .resolve_bool("apprunnerAutoDeploymentsEnabled")?
                .unwrap_or(true),
            health_check: HealthCheckSettings {
                protocol,
                timeout_seconds: resolver
                    .resolve_u32("apprunnerHealthCheckTimeout")?
                    .unwrap_or(DEFAULT_HEALTH_CHECK_TIMEOUT_SECS),
                interval_seconds: resolver
                    .resolve_u32("apprunnerHealthCheckInterval")?
                    .unwrap_or(DEFAULT_HEALTH_CHECK_INTERVAL_SECS),
                unhealthy_threshold: resolver
                    .resolve_u32("apprunnerUnhealthyThreshold")?
                    .unwrap_or(DEFAULT_UNHEALTHY_THRESHOLD),
                healthy_threshold: resolver
                    .resolve_u32("apprunnerHealthyThreshold")?
                    .unwrap_or(DEFAULT_HEALTHY_THRESHOLD),
            },
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !ALLOWED_SERVICE_CPU.contains(&self.cpu.as_str()) {
            return Err(ConfigError::InvalidInstanceSize {
                message: format!(
                    "cpu must be one of {} (got '{}')",
                    ALLOWED_SERVICE_CPU.join(", "),
                    self.cpu
                ),
            });
        }

        if !ALLOWED_SERVICE_MEMORY.contains(&self.memory.as_str()) {
            return Err(ConfigError::InvalidInstanceSize {
                message: format!(
                    "memory must be one of {} (got '{}')",
                    ALLOWED_SERVICE_MEMORY.join(", "),
                    self.memory
                ),
            });
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                var: "APPRUNNER_PORT".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        let checks = [
            ("timeout", self.health_check.timeout_seconds),
            ("interval", self.health_check.interval_seconds),
            ("unhealthy threshold", self.health_check.unhealthy_threshold),
            ("healthy threshold", self.health_check.healthy_threshold),
        ];
        for (label, value) in checks {
            if !(MIN_HEALTH_CHECK_VALUE..=MAX_HEALTH_CHECK_VALUE).contains(&value) {
                return Err(ConfigError::InvalidHealthCheck {
                    message: format!(
                        "{label} must be between {MIN_HEALTH_CHECK_VALUE} and \
                         {MAX_HEALTH_CHECK_VALUE} (got {value})"
                    ),
                });
            }
        }

        Ok(())
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
    fn test_defaults_match_stack_values() {
        let settings = ServiceSettings::resolve(&resolver(&[])).unwrap();

        assert_eq!(settings.service_name, "apprunner");
        assert_eq!(settings.cpu, "1 vCPU");
        assert_eq!(settings.memory, "2 GB");
        assert_eq!(settings.port, 80);
        assert!(settings.auto_deployments_enabled);
        assert_eq!(settings.health_check.protocol, HealthCheckProtocol::Tcp);
        assert_eq!(settings.health_check.timeout_seconds, 3);
        assert_eq!(settings.health_check.interval_seconds, 5);
        assert_eq!(settings.health_check.unhealthy_threshold, 3);
        assert_eq!(settings.health_check.healthy_threshold, 1);
    }

    #[test]
    fn test_protocol_is_case_insensitive() {
        for raw in ["http", "HTTP", "Http"] {
            let settings = ServiceSettings::resolve(&resolver(&[(
                "APPRUNNER_HEALTH_CHECK_PROTOCOL",
                raw,
            )]))
            .unwrap();
            assert_eq!(settings.health_check.protocol, HealthCheckProtocol::Http);
        }
    }

    #[test]
    fn test_rejects_unknown_protocol() {
        let result =
            ServiceSettings::resolve(&resolver(&[("APPRUNNER_HEALTH_CHECK_PROTOCOL", "udp")]));

        match result {
            Err(ConfigError::InvalidValue { var, message }) => {
                assert_eq!(var, "APPRUNNER_HEALTH_CHECK_PROTOCOL");
                assert_eq!(message, "must be TCP or HTTP");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_cpu_allocation() {
        let result = ServiceSettings::resolve(&resolver(&[("APPRUNNER_CPU", "3 vCPU")]));
        assert!(matches!(result, Err(ConfigError::InvalidInstanceSize { .. })));
    }

    #[test]
    fn test_rejects_unknown_memory_allocation() {
        let result = ServiceSettings::resolve(&resolver(&[("APPRUNNER_MEMORY", "16 GB")]));
        assert!(matches!(result, Err(ConfigError::InvalidInstanceSize { .. })));
    }

    #[test]
    fn test_rejects_out_of_bounds_health_check_values() {
        for (key, value) in [
            ("APPRUNNER_HEALTH_CHECK_TIMEOUT", "0"),
            ("APPRUNNER_HEALTH_CHECK_INTERVAL", "21"),
            ("APPRUNNER_UNHEALTHY_THRESHOLD", "0"),
            ("APPRUNNER_HEALTHY_THRESHOLD", "100"),
        ] {
            let result = ServiceSettings::resolve(&resolver(&[(key, value)]));
            assert!(
                matches!(result, Err(ConfigError::InvalidHealthCheck { .. })),
                "{key}={value} should be rejected"
            );
        }
    }

    #[test]
    fn test_protocol_serializes_uppercase() {
        let json = serde_json::to_string(&HealthCheckProtocol::Tcp).unwrap();
        assert_eq!(json, "\"TCP\"");
    }
}
