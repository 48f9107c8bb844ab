//! Basic CLI E2E tests.
//!
//! Tests invoke the compiled binary as a subprocess and verify outputs.
//! Each test gets its own home directory so runs never touch real state
//! and can execute in parallel.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command against the given home directory and return
/// (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_pomoduo"))
        .args(args)
        .env("HOME", home)
        .env("POMODUO_ENV", "dev")
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn home() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn timer_status_prints_snapshot_json() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["currentSegment"], "work");
    assert_eq!(json["isRunning"], false);
    assert_eq!(json["workRemainingSeconds"], 1500);
}

#[test]
fn timer_set_updates_persisted_duration() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["timer", "set", "work", "4m30s"]);
    assert_eq!(code, 0, "timer set failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "duration_set");
    assert_eq!(event["seconds"], 270);

    // The new duration survives into the next invocation.
    let (stdout, _, code) = run_cli(home.path(), &["timer", "status"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["workDuration"], 270);
    assert_eq!(json["workRemainingSeconds"], 270);
}

#[test]
fn timer_set_rejects_garbage_and_zero() {
    let home = home();
    let (_, stderr, code) = run_cli(home.path(), &["timer", "set", "work", "soon"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid duration"));

    let (_, stderr, code) = run_cli(home.path(), &["timer", "set", "break", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("at least one second"));
}

#[test]
fn timer_start_then_stop_round_trips() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["timer", "start"]);
    assert_eq!(code, 0, "timer start failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "timer_started");

    let (stdout, _, code) = run_cli(home.path(), &["timer", "stop"]);
    assert_eq!(code, 0, "timer stop failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "timer_stopped");
}

#[test]
fn timer_skip_swaps_segments() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["timer", "skip"]);
    assert_eq!(code, 0, "timer skip failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "segment_skipped");
    assert_eq!(event["to_segment"], "break");
}

#[test]
fn log_list_starts_empty() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["log", "list"]);
    assert_eq!(code, 0, "log list failed");
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries, serde_json::json!([]));
}

#[test]
fn log_remove_unknown_id_fails() {
    let home = home();
    let (_, stderr, code) = run_cli(
        home.path(),
        &["log", "remove", "00000000-0000-0000-0000-000000000000"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("no log entry"));
}

#[test]
fn config_get_set_list() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "25");

    let (_, _, code) = run_cli(home.path(), &["config", "set", "timer.work_minutes", "50"]);
    assert_eq!(code, 0, "config set failed");
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "50");

    let (stdout, _, code) = run_cli(home.path(), &["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["presets"].as_array().unwrap().len(), 3);
}

#[test]
fn timer_preset_accepts_config_name() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["timer", "preset", "deep"]);
    assert_eq!(code, 0, "timer preset failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "preset_applied");
    assert_eq!(event["work_minutes"], 50);
    assert_eq!(event["break_minutes"], 10);

    let (_, stderr, code) = run_cli(home.path(), &["timer", "preset", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown preset"));
}
