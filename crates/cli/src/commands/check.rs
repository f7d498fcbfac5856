//! Plan validation command.

use anyhow::Result;
use apprunner_config::{ConfigResolver, DeploymentPlan};

use crate::error::ExitCode;

/// Resolve and validate the full plan without rendering it.
///
/// Resolution already runs every bounds check, so a plan that resolves is a
/// plan that passed.
pub fn run(resolver: &ConfigResolver) -> Result<ExitCode> {
    let plan = DeploymentPlan::resolve(resolver)?;

    if !plan.target.is_complete() {
        tracing::warn!("deployment target is incomplete (set ACCOUNT_ID and REGION)");
    }

    println!("Configuration OK");
    Ok(ExitCode::Success)
}
