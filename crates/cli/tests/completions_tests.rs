//! Integration tests for the `completions` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_completions_bash() {
    Command::cargo_bin("apprunner-cli")
        .unwrap()
        .env("DOTENV_DISABLED", "1")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apprunner-cli"));
}

#[test]
fn test_completions_rejects_unknown_shell() {
    Command::cargo_bin("apprunner-cli")
        .unwrap()
        .env("DOTENV_DISABLED", "1")
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}
