//! End-to-end tests of the binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

mod common;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("access-log-analyzer").unwrap();
    // Keep runs independent of the developer's environment
    cmd.env_remove("RUST_LOG")
        .env_remove("ACCESS_LOG_TOP_N")
        .env_remove("ACCESS_LOG_FILE")
        .env_remove("ACCESS_LOG_DIR")
        .env_remove("ACCESS_LOG_JSON")
        .env_remove("ACCESS_LOG_FORMAT")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_text_report() {
    let temp_dir = TempDir::new().unwrap();
    let log = common::create_test_log(temp_dir.path(), "access.log", &common::sample_lines()).unwrap();

    cli()
        .current_dir(temp_dir.path())
        .arg(&log)
        .args(["--top-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unique IP addresses: 3"))
        .stdout(predicate::str::contains("Top 2 most visited URLs:"))
        .stdout(predicate::str::contains("192.168.0.1"));
}

#[test]
fn test_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let log = common::create_test_log(temp_dir.path(), "access.log", &common::sample_lines()).unwrap();

    let output = cli()
        .current_dir(temp_dir.path())
        .arg(&log)
        .args(["-n", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["uniqueOrigins"], 3);
    assert_eq!(value["topOrigins"][0]["key"], "192.168.0.1");
    assert_eq!(value["topOrigins"][0]["count"], 3);
    assert_eq!(value["topPaths"][1]["key"], "/about");
}

#[test]
fn test_reads_file_from_config() {
    let temp_dir = TempDir::new().unwrap();
    common::create_test_log(temp_dir.path(), "site.log", &common::sample_lines()).unwrap();
    std::fs::write(
        temp_dir.path().join("access-log-analyzer.toml"),
        "[input]\nlog_dir = \".\"\nlog_file = \"site.log\"\n\n[analysis]\ntop_n = 1\n",
    )
    .unwrap();

    cli()
        .current_dir(temp_dir.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"topN\": 1"));
}

#[test]
fn test_top_n_zero_warns_after_logging_starts() {
    let temp_dir = TempDir::new().unwrap();
    let log = common::create_test_log(temp_dir.path(), "access.log", &common::sample_lines()).unwrap();

    cli()
        .current_dir(temp_dir.path())
        .env("LOG_LEVEL", "warn")
        .env("LOG_OUTPUT", "console")
        .arg(&log)
        .args(["--top-n", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unique IP addresses: 3"))
        .stderr(predicate::str::contains("top_n is 0, ranked lists will be empty"));
}

#[test]
fn test_config_file_is_logged() {
    let temp_dir = TempDir::new().unwrap();
    common::create_test_log(temp_dir.path(), "access.log", &common::sample_lines()).unwrap();
    std::fs::write(
        temp_dir.path().join("access-log-analyzer.toml"),
        "[logging]\nlevel = \"info\"\n",
    )
    .unwrap();

    cli()
        .current_dir(temp_dir.path())
        .env_remove("LOG_LEVEL")
        .env("LOG_OUTPUT", "console")
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded configuration from file"));
}

#[test]
fn test_top_n_too_large() {
    let temp_dir = TempDir::new().unwrap();
    let log = common::create_test_log(temp_dir.path(), "access.log", &common::sample_lines()).unwrap();

    cli()
        .current_dir(temp_dir.path())
        .arg(&log)
        .args(["--top-n", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exceeds distinct group count"));
}

#[test]
fn test_no_valid_records() {
    let temp_dir = TempDir::new().unwrap();
    let log = common::create_test_log(
        temp_dir.path(),
        "access.log",
        &["garbage".to_string(), "more garbage".to_string()],
    )
    .unwrap();

    cli()
        .current_dir(temp_dir.path())
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid records in input"));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    cli()
        .current_dir(temp_dir.path())
        .arg("nope.log")
        .arg("--json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\""));
}
