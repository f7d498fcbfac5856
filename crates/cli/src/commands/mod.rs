//! Subcommand implementations.

pub mod check;
pub mod completions;
pub mod get;
pub mod key;
pub mod plan;
