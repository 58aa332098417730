//! The `tether` binary, driven as a subprocess

use std::process::{Command, Output};

use tempfile::NamedTempFile;

use crate::common::{gke_cluster, mysql_claim, temp_file, tether_bin};

/// Run `tether` with an isolated, empty config.
fn tether(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::new(tether_bin())
        .env("TETHER_CONFIG", dir.path().join("config.toml"))
        .env("RUST_LOG", "warn")
        .args(args)
        .output()
        .expect("run tether")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn record_file<T: serde::Serialize>(record: &T) -> NamedTempFile {
    temp_file(&serde_json::to_string_pretty(record).unwrap())
}

fn path(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

#[test]
fn get_prints_one_row_per_record() {
    let mysql = record_file(&mysql_claim());
    let gke = record_file(&gke_cluster());

    let output = tether(&["get", path(&mysql), path(&gke)]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("NAME"));
    assert!(lines[1].starts_with("app-db"));
    assert!(lines[1].contains("standard-mysql"));
    assert!(lines[2].starts_with("gke-7d1c"));
    assert!(lines[2].ends_with("<unknown>"));
}

#[test]
fn check_fails_on_unlisted_engine_version() {
    let mut claim = mysql_claim();
    claim.spec.engine_version = "8.0".to_owned();
    let file = record_file(&claim);

    let output = tether(&["check", path(&file)]);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        r#"MySQLInstance app-db: engine version "8.0" is not one of 5.6, 5.7"#
    );
}

#[test]
fn check_rejects_claim_without_engine_version() {
    let file = temp_file(
        r#"{
            "apiVersion": "database.tether.io/v1alpha1",
            "kind": "MySQLInstance",
            "metadata": {"name": "app-db", "namespace": "default"},
            "spec": {"classRef": {"namespace": "default", "name": "standard-mysql"}}
        }"#,
    );

    let output = tether(&["check", path(&file)]);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "MySQLInstance app-db: engine version is required (allowed: 5.6, 5.7)"
    );
}

#[test]
fn check_passes_listed_versions() {
    let file = record_file(&mysql_claim());
    let output = tether(&["check", path(&file)]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "MySQLInstance app-db: ok");
}

#[test]
fn transition_follows_the_configured_mode() {
    let output = tether(&["transition", "unbound", "bound"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Unbound -> Bound: allowed");

    let output = tether(&["transition", "failed", "bound"]);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "illegal binding phase transition Failed -> Bound"
    );

    let config = temp_file("[binding]\ntransitions = \"permissive\"\n");
    let output = tether(&["--config", path(&config), "transition", "failed", "bound"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("permitted in permissive mode"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("typo.toml");
    let output = tether(&[
        "--config",
        missing.to_str().unwrap(),
        "transition",
        "unbound",
        "bound",
    ]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("typo.toml"));
}

#[test]
fn unreadable_input_is_an_error() {
    let output = tether(&["get", "/nonexistent/tether/record.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("reading"));
}

#[test]
fn unknown_phase_is_a_usage_error() {
    let output = tether(&["transition", "pending", "bound"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("expected one of"));
}
