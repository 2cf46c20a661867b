use predicates::prelude::*;
use serial_test::serial;
use tempfile::tempdir;

mod test_helpers;
use test_helpers::base_moodlog_command;

/// Test basic tracing infrastructure setup
#[test]
fn test_tracing_setup() {
    // Using an actual uuid generation to check the dependency is linked
    let id = uuid::Uuid::new_v4();
    assert_eq!(id.get_version_num(), 4);
}

#[test]
#[serial]
fn test_json_logs_are_one_object_per_line() {
    let temp_dir = tempdir().unwrap();

    let output = base_moodlog_command(temp_dir.path())
        .args(["--log-format", "json", "history"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("level").is_some());
        assert!(value.get("timestamp").is_some());
    }
}

#[test]
#[serial]
fn test_verbose_enables_debug_logs() {
    let temp_dir = tempdir().unwrap();

    base_moodlog_command(temp_dir.path())
        .args(["history"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not());

    base_moodlog_command(temp_dir.path())
        .args(["--verbose", "history"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
#[serial]
fn test_rust_log_overrides_verbose() {
    let temp_dir = tempdir().unwrap();

    base_moodlog_command(temp_dir.path())
        .env("RUST_LOG", "error")
        .args(["--verbose", "history"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
#[serial]
fn test_errors_are_reported_once() {
    let temp_dir = tempdir().unwrap();

    let output = base_moodlog_command(temp_dir.path())
        .args(["add", "--mood", "happy"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stderr.matches("Please select a mood and write a note!").count(),
        1
    );
}
