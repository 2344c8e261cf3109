use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample.json");

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("gtv").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gtv"));
}

#[test]
fn render_from_local_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("page.html");
    let csv = dir.path().join("rows.csv");
    let mut cmd = Command::cargo_bin("gtv").unwrap();
    cmd.args(["render", "--input", SAMPLE, "--stats"])
        .arg("--out")
        .arg(&out)
        .arg("--csv")
        .arg(&csv);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("January"))
        .stdout(predicate::str::contains("coolest year 1850"))
        .stdout(predicate::str::contains("warmest year 1855"))
        .stderr(predicate::str::contains("Wrote heatmap of 72 records"));
    assert!(out.exists());
    assert!(csv.exists());
}

#[test]
fn missing_input_fails_visibly() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("gtv").unwrap();
    cmd.args(["render", "--input"])
        .arg(dir.path().join("missing.json"))
        .arg("--out")
        .arg(dir.path().join("page.html"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn render_online_dataset() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("gtv").unwrap();
    cmd.arg("render").arg("--out").arg(dir.path().join("live.html"));
    cmd.assert().success();
}
