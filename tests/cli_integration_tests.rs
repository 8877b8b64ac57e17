//! End-to-end CLI integration tests
//!
//! These tests run the welcome-flow binary against flow definitions and a
//! completion store inside a temporary directory.

use predicates::prelude::*;
use std::fs::write;
use assert_cmd::Command;
use tempfile::TempDir;

const INTRO_FLOW: &str = r#"
name = "Intro Tour"

[[pages]]
id = "welcome"
title = "Welcome aboard"

[[pages]]
id = "features"
title = "What you can do"

[[pages]]
id = "ready"
title = "You're ready"
"#;

/// Helper for setting up CLI test environment
struct CliTestEnvironment {
    temp_dir: TempDir,
}

impl CliTestEnvironment {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path().join("intro.toml"), INTRO_FLOW).unwrap();
        Self { temp_dir }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("welcome-flow").unwrap();
        cmd.current_dir(self.temp_dir.path())
            .env_remove("RUST_LOG")
            .arg("--store")
            .arg(self.temp_dir.path().join("completions.json"));
        cmd
    }
}

#[test]
fn test_run_to_completion_records_flow() {
    let env = CliTestEnvironment::new();

    env.command()
        .args(["run", "intro.toml", "--commands", "next,next,done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You're ready"))
        .stdout(predicate::str::contains("\"result\": \"completed\""))
        .stdout(predicate::str::contains("welcome_screen_intro_tour"));

    env.command()
        .args(["status", "welcome_screen_intro_tour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("completed"))
        .stdout(predicate::str::contains("not completed").not());
}

#[test]
fn test_completed_flow_is_not_shown_again() {
    let env = CliTestEnvironment::new();

    env.command()
        .args(["run", "intro.toml", "--commands", "skip"])
        .assert()
        .success();

    env.command()
        .args(["run", "intro.toml", "--commands", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already completed"));

    env.command()
        .args(["run", "intro.toml", "--force", "--commands", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("still open on page 2/3"));
}

#[test]
fn test_dismiss_cancels_without_recording() {
    let env = CliTestEnvironment::new();

    env.command()
        .args(["run", "intro.toml", "--commands", "next,dismiss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\": \"cancelled\""));

    env.command()
        .args(["status", "welcome_screen_intro_tour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not completed"));
}

#[test]
fn test_reset_makes_flow_show_again() {
    let env = CliTestEnvironment::new();

    env.command()
        .args(["run", "intro.toml", "--commands", "next,next,done"])
        .assert()
        .success();

    env.command()
        .args(["reset", "welcome_screen_intro_tour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset"));

    env.command()
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed flows"));
}

#[test]
fn test_commands_from_stdin() {
    let env = CliTestEnvironment::new();

    env.command()
        .args(["run", "intro.toml"])
        .write_stdin("next\nbogus\nprev\nprev\nback\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown flow command: bogus"))
        .stdout(predicate::str::contains("not possible on this page"))
        .stdout(predicate::str::contains("\"result\": \"completed\""));
}

#[test]
fn test_inspect_lists_pages_with_controls() {
    let env = CliTestEnvironment::new();

    env.command()
        .args(["inspect", "intro.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flow 'welcome_screen_intro_tour'"))
        .stdout(predicate::str::contains("[2] ready"))
        .stdout(predicate::str::contains("\"done\":true"));
}

#[test]
fn test_missing_flow_file_fails() {
    let env = CliTestEnvironment::new();

    env.command()
        .args(["run", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read flow definition"));
}
