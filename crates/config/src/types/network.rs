//! Network stack settings.
//!
//! Responsibilities:
//! - Define the VPC settings (CIDR block, availability zones, subnet mask).
//! - Validate CIDR syntax and prefix bounds.
//!
//! Invariants:
//! - The VPC CIDR must be a well-formed IPv4 network address (no host bits
//!   set) with a prefix between `MIN_CIDR_PREFIX` and `MAX_CIDR_PREFIX`.
//! - The subnet mask must be at least as long as the VPC prefix.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SUBNET_CIDR_MASK, DEFAULT_VPC_CIDR_BLOCK, DEFAULT_VPC_MAX_AZS, MAX_CIDR_PREFIX,
    MAX_VPC_MAX_AZS, MIN_CIDR_PREFIX,
};
use crate::error::ConfigError;
use crate::resolver::ConfigResolver;

/// VPC settings for the network stack.
///
/// Subnets are laid out in two tiers (private with egress, public), each
/// carved with `subnet_cidr_mask` across `max_azs` availability zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// IPv4 CIDR block for the VPC (e.g. `10.0.0.0/16`).
    pub vpc_cidr_block: String,
    /// Number of availability zones to spread subnets across.
    pub max_azs: u32,
    /// CIDR mask for each subnet tier.
    pub subnet_cidr_mask: u8,
}

impl NetworkSettings {
    /// Resolve the network settings, falling back to stack defaults.
    pub fn resolve(resolver: &ConfigResolver) -> Result<Self, ConfigError> {
        let subnet_cidr_mask = match resolver.resolve_u32("vpcSubnetCidrMask")? {
            Some(mask) if mask > u32::from(MAX_CIDR_PREFIX) => {
                return Err(ConfigError::InvalidCidr {
                    message: format!(
                        "subnet mask must be between {MIN_CIDR_PREFIX} and {MAX_CIDR_PREFIX} (got {mask})"
                    ),
                });
            }
            Some(mask) => mask as u8,
            None => DEFAULT_SUBNET_CIDR_MASK,
        };

        let settings = Self {
            vpc_cidr_block: resolver
                .resolve_string("vpcCidrBlock")
                .unwrap_or_else(|| DEFAULT_VPC_CIDR_BLOCK.to_string()),
            max_azs: resolver
                .resolve_u32("vpcMaxAzs")?
                .unwrap_or(DEFAULT_VPC_MAX_AZS),
            subnet_cidr_mask,
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (_, prefix) = parse_cidr_block(&self.vpc_cidr_block)?;

        if !(MIN_CIDR_PREFIX..=MAX_CIDR_PREFIX).contains(&prefix) {
            return Err(ConfigError::InvalidCidr {
                message: format!(
                    "VPC prefix must be between /{MIN_CIDR_PREFIX} and /{MAX_CIDR_PREFIX} (got /{prefix})"
                ),
            });
        }

        if !(MIN_CIDR_PREFIX..=MAX_CIDR_PREFIX).contains(&self.subnet_cidr_mask) {
            return Err(ConfigError::InvalidCidr {
                message: format!(
                    "subnet mask must be between {} and {} (got {})",
                    MIN_CIDR_PREFIX, MAX_CIDR_PREFIX, self.subnet_cidr_mask
                ),
            });
        }

        if self.subnet_cidr_mask < prefix {
            return Err(ConfigError::InvalidCidr {
                message: format!(
                    "subnet mask /{} is wider than the VPC prefix /{prefix}",
                    self.subnet_cidr_mask
                ),
            });
        }

        if self.max_azs == 0 || self.max_azs > MAX_VPC_MAX_AZS {
            return Err(ConfigError::InvalidValue {
                var: "VPC_MAX_AZS".to_string(),
                message: format!("must be between 1 and {MAX_VPC_MAX_AZS} (got {})", self.max_azs),
            });
        }

        Ok(())
    }
}

/// Parse an IPv4 CIDR block into its network address and prefix length.
///
/// The address must be the network address proper: host bits below the
/// prefix must be zero.
fn parse_cidr_block(raw: &str) -> Result<(Ipv4Addr, u8), ConfigError> {
    let (addr_part, prefix_part) = raw.split_once('/').ok_or_else(|| ConfigError::InvalidCidr {
        message: format!("expected address/prefix (e.g. 10.0.0.0/16), got '{raw}'"),
    })?;

    let addr: Ipv4Addr = addr_part.parse().map_err(|_| ConfigError::InvalidCidr {
        message: format!("invalid IPv4 address '{addr_part}'"),
    })?;

    let prefix: u8 = prefix_part
        .parse()
        .ok()
        .filter(|p| *p <= 32)
        .ok_or_else(|| ConfigError::InvalidCidr {
            message: format!("invalid prefix length '{prefix_part}'"),
        })?;

    let host_mask = u32::MAX.checked_shr(u32::from(prefix)).unwrap_or(0);
    if u32::from(addr) & host_mask != 0 {
        return Err(ConfigError::InvalidCidr {
            message: format!("'{raw}' has host bits set below the /{prefix} prefix"),
        });
    }

    Ok((addr, prefix))
}
