// Integration tests for the judging CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the judging binary.
fn judging() -> Command {
    Command::cargo_bin("judging").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    judging()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("judging"));
}

#[test]
fn cli_help_flag() {
    judging()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hackathon judging"));
}

#[test]
fn rank_requires_path() {
    judging()
        .arg("rank")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn init_requires_path() {
    judging()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn rank_rejects_unknown_format() {
    judging()
        .args(["rank", "/tmp/scores", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn verbose_and_quiet_conflict() {
    judging()
        .args(["-v", "-q", "rank", "/tmp/scores"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
