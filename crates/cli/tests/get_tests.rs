//! Integration tests for the `get` subcommand.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("apprunner-cli").unwrap();
    cmd.env("DOTENV_DISABLED", "1");
    cmd
}

#[test]
fn test_get_resolves_ambient_variable() {
    cli()
        .env("RDS_MULTI_AZ", "true")
        .args(["get", "rdsMultiAz"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_get_unset_key_uses_distinct_exit_code() {
    cli()
        .env_remove("DEFINITELY_UNSET_SETTING")
        .args(["get", "definitelyUnsetSetting"])
        .assert()
        .code(4)
        .stdout("")
        .stderr(predicate::str::contains("DEFINITELY_UNSET_SETTING is unset"));
}

#[test]
fn test_get_reads_default_dotenv_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "RDS_MULTI_AZ=true\n").unwrap();

    Command::cargo_bin("apprunner-cli")
        .unwrap()
        .env_remove("DOTENV_DISABLED")
        .env_remove("RDS_MULTI_AZ")
        .current_dir(temp_dir.path())
        .args(["get", "rdsMultiAz"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_ambient_variable_wins_over_dotenv_value() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "RDS_MULTI_AZ=false\n").unwrap();

    Command::cargo_bin("apprunner-cli")
        .unwrap()
        .env_remove("DOTENV_DISABLED")
        .env("RDS_MULTI_AZ", "true")
        .current_dir(temp_dir.path())
        .args(["get", "rdsMultiAz"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_explicit_env_file_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let env_file = temp_dir.path().join("deploy.env");
    fs::write(&env_file, "APPRUNNER_SERVICE_NAME=shop-web\n").unwrap();

    cli()
        .env_remove("APPRUNNER_SERVICE_NAME")
        .args(["--env-file", env_file.to_str().unwrap(), "get", "apprunnerServiceName"])
        .assert()
        .success()
        .stdout("shop-web\n");
}

#[test]
fn test_missing_explicit_env_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let absent = temp_dir.path().join("absent.env");

    cli()
        .args(["--env-file", absent.to_str().unwrap(), "get", "rdsMultiAz"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load environment"));
}
