//! Plan rendering command.
//!
//! Responsibilities:
//! - Resolve the full deployment plan and render it as JSON or YAML.
//! - Write to stdout or to `--output-file`.
//!
//! Invariants:
//! - Rendering output goes to stdout (or the file); warnings go through
//!   tracing on stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use apprunner_config::{ConfigResolver, DeploymentPlan};

use crate::args::OutputFormat;
use crate::error::ExitCode;

pub fn run(
    resolver: &ConfigResolver,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<ExitCode> {
    let plan = DeploymentPlan::resolve(resolver)?;

    if !plan.target.is_complete() {
        tracing::warn!(
            "deployment target is incomplete (set ACCOUNT_ID and REGION); \
             the plan is environment-agnostic and has no image identifier"
        );
    }

    let rendered = match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&plan)?;
            out.push('\n');
            out
        }
        OutputFormat::Yaml => serde_yaml::to_string(&plan)?,
    };

    match output_file {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write plan to {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote deployment plan");
        }
        None => print!("{rendered}"),
    }

    Ok(ExitCode::Success)
}
