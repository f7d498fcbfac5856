//! Integration tests for the `check` subcommand and its exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("apprunner-cli").unwrap();
    cmd.env("DOTENV_DISABLED", "1");
    for key in ["RDS_PORT", "RDS_ALLOCATED_STORAGE", "APPRUNNER_MEMORY"] {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn test_check_passes_on_defaults() {
    cli()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK"));
}

#[test]
fn test_check_rejects_unparsable_value() {
    cli()
        .env("RDS_PORT", "mysql")
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("RDS_PORT"))
        .stderr(predicate::str::contains("must be a number"));
}

#[test]
fn test_check_rejects_out_of_bounds_value() {
    cli()
        .env("RDS_ALLOCATED_STORAGE", "5")
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("allocated storage"));
}

#[test]
fn test_check_rejects_unknown_memory_allocation() {
    cli()
        .env("APPRUNNER_MEMORY", "64 GB")
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("memory must be one of"));
}
