// Help output for the welcome-flow binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("welcome-flow").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn test_run_help_documents_command_tokens() {
    let mut cmd = Command::cargo_bin("welcome-flow").unwrap();

    cmd.args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--commands"))
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let mut cmd = Command::cargo_bin("welcome-flow").unwrap();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
