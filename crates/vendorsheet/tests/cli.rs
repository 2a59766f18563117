#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// The binary with a clean environment, run from an empty directory so no
/// stray `.env` or user config is picked up.
fn vendorsheet_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("vendorsheet"));
    cmd.env_clear().current_dir(dir.path());
    cmd
}

#[test]
fn test_help_lists_entities() {
    let dir = TempDir::new().unwrap();
    vendorsheet_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("category"))
        .stdout(predicate::str::contains("mapping"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    vendorsheet_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("vendorsheet "));
}

#[test]
fn test_missing_spreadsheet_id_is_reported() {
    let dir = TempDir::new().unwrap();
    vendorsheet_cmd(&dir)
        .args(["category", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Could not load configuration"))
        .stderr(predicate::str::contains("VENDORSHEET_SPREADSHEET_ID"));
}

#[test]
fn test_bad_arguments_exit_before_config() {
    let dir = TempDir::new().unwrap();
    vendorsheet_cmd(&dir)
        .args(["item", "delete"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<IDS>"));
}

#[test]
fn test_unreachable_api_is_an_upstream_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        "spreadsheet_id = \"sheet123\"\napi_base_url = \"http://127.0.0.1:9\"\nrequest_timeout_secs = 2\n",
    )
    .unwrap();

    vendorsheet_cmd(&dir)
        .args(["category", "list", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Upstream error"));
}

#[test]
fn test_env_and_config_file_combine() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("vendorsheet.toml");
    fs::write(&config, "api_base_url = \"not a url\"\n").unwrap();

    // The spreadsheet id comes from the environment and the bad base URL
    // from the file, so loading succeeds and connecting fails.
    vendorsheet_cmd(&dir)
        .env("VENDORSHEET_SPREADSHEET_ID", "sheet123")
        .args(["--config"])
        .arg(&config)
        .args(["uom", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid api_base_url"));
}
