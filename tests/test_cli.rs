//! Exit-code and output contract of the fixlint binary.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn run_fixlint(args: &[&str], dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fixlint"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run fixlint")
}

#[test]
fn test_valid_fixture_exits_zero() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("data.json"),
        r#"{
            "Members": [
                {"id": 1, "first_name": "Grace", "last_name": "Hopper",
                 "designation": "Professor"}
            ]
        }"#,
    )
    .unwrap();

    let output = run_fixlint(&["data.json"], tmp.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("all entities valid"));
}

#[test]
fn test_invalid_fixture_exits_one() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("data.json"),
        r#"{
            "Members": [
                {"id": 1, "first_name": "Grace", "last_name": "Hopper"}
            ]
        }"#,
    )
    .unwrap();

    let output = run_fixlint(&["data.json"], tmp.path());
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("missing required field 'designation'"));
}

#[test]
fn test_quiet_prints_summary_only() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("data.json"), "{}").unwrap();

    let output = run_fixlint(&["--quiet", "data.json"], tmp.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Summary"));
    assert!(!stdout.contains("Fixture Validation Report"));
}

#[test]
fn test_unsupported_extension_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("data.xlsx"), "not json").unwrap();

    let output = run_fixlint(&["data.xlsx"], tmp.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported fixture format"));
}

#[test]
fn test_missing_file_fails_with_path_in_message() {
    let tmp = TempDir::new().unwrap();

    let output = run_fixlint(&["absent.json"], tmp.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.json"));
}
