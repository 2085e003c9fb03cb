//! Integration tests for the command-line binary.
//!
//! Only read-only paths are exercised here; the install flow is covered
//! against a scripted host in `bootstrap_test.rs`.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bin() -> Command {
    let mut cmd = Command::new(cargo_bin("node-bootstrap"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Node.js"))
        .stdout(predicate::str::contains("--os"))
        .stdout(predicate::str::contains("status"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_os() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["--os", "solaris", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    bin().arg("frobnicate").assert().failure();
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    bin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("node-bootstrap"));
    Ok(())
}

#[test]
fn cli_completions_rejects_unknown_shell() -> Result<(), Box<dyn std::error::Error>> {
    bin().args(["completions", "tcsh"]).assert().failure();
    Ok(())
}

#[test]
fn cli_status_without_manifest_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    bin()
        .arg("status")
        .arg("-p")
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("package.json not found"));
    Ok(())
}

#[test]
fn cli_status_json_reports_manifest() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("package.json"), "{}")?;

    let output = bin()
        .args(["status", "--json", "--os", "linux", "-p"])
        .arg(temp.path())
        .output()?;

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["os"]["family"], "linux");
    assert_eq!(report["os"]["source"]["kind"], "flag");
    assert_eq!(report["manifest"]["present"], true);
    assert!(report["node"]["present"].is_boolean());
    Ok(())
}
