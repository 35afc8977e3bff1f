//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_deskclock"))
        .env("DESKCLOCK_HOME", home)
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(home: &Path, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_timer_status_initial() {
    let home = tempfile::tempdir().unwrap();
    let status = run_json(home.path(), &["timer", "status"]);
    assert_eq!(status["type"], "state_snapshot");
    assert_eq!(status["session"], "work");
    assert_eq!(status["seconds_remaining"], 1500);
    assert_eq!(status["running"], false);
}

#[test]
fn test_timer_state_persists_between_runs() {
    let home = tempfile::tempdir().unwrap();
    let started = run_json(home.path(), &["timer", "start"]);
    assert_eq!(started["type"], "timer_started");

    let (stdout, _, code) = run_cli(home.path(), &["timer", "tick", "-n", "10"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"seconds_remaining\": 1490"));

    let paused = run_json(home.path(), &["timer", "pause"]);
    assert_eq!(paused["seconds_remaining"], 1490);

    let status = run_json(home.path(), &["timer", "status"]);
    assert_eq!(status["running"], false);
    assert_eq!(status["seconds_remaining"], 1490);
}

#[test]
fn test_timer_session_end_and_reset() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "set", "timer.work_minutes", "1"]);
    assert_eq!(code, 0);

    run_cli(home.path(), &["timer", "start"]);
    let (stdout, _, code) = run_cli(home.path(), &["timer", "tick", "-n", "61"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"type\": \"session_ended\""));
    assert!(stdout.contains("\"next\": \"short_break\""));

    let status = run_json(home.path(), &["timer", "status"]);
    assert_eq!(status["session"], "short_break");
    assert_eq!(status["completed_work_sessions"], 1);
    assert_eq!(status["running"], false);

    let reset = run_json(home.path(), &["timer", "reset"]);
    assert_eq!(reset["type"], "timer_reset");
    assert_eq!(reset["seconds_remaining"], 300);
}

#[test]
fn test_mode_cycle_and_toggle() {
    let home = tempfile::tempdir().unwrap();
    let shown = run_json(home.path(), &["mode", "show"]);
    assert_eq!(shown["mode"], "TIME");
    assert_eq!(shown["hour_format"], "12h");

    let cycled = run_json(home.path(), &["mode", "cycle"]);
    assert_eq!(cycled["mode"], "WORLD_CLOCK");

    let toggled = run_json(home.path(), &["mode", "toggle-format"]);
    assert_eq!(toggled["format"], "24h");

    let shown = run_json(home.path(), &["mode", "show"]);
    assert_eq!(shown["mode"], "WORLD_CLOCK");
    assert_eq!(shown["indicator"], "WORLD CLOCK");
    assert_eq!(shown["hour_format"], "24h");

    run_cli(home.path(), &["mode", "cycle"]);
    let cycled = run_json(home.path(), &["mode", "cycle"]);
    assert_eq!(cycled["mode"], "TIME");
}

#[test]
fn test_show_renders_current_mode() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["show"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("[TIME]"));

    run_cli(home.path(), &["mode", "cycle"]);
    run_cli(home.path(), &["mode", "cycle"]);
    let (stdout, _, _) = run_cli(home.path(), &["show"]);
    assert!(stdout.contains("Format: 12-Hour"));
}

#[test]
fn test_world_lists_configured_zones() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["world"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("NEW: "));
    assert!(stdout.contains("LON: "));
}

#[test]
fn test_clock_json() {
    let home = tempfile::tempdir().unwrap();
    let clock = run_json(home.path(), &["clock", "--json"]);
    assert!(clock["date"].as_str().unwrap().contains(", "));
    assert!(clock["time"]["ampm"].is_string());

    let hands = run_json(home.path(), &["clock", "--analog", "--json"]);
    assert!(hands["second"].as_f64().unwrap() < 360.0);
}

#[test]
fn test_weather_demo_without_key() {
    let home = tempfile::tempdir().unwrap();
    let report = run_json(home.path(), &["weather", "now", "--city", "Oslo", "--json"]);
    assert_eq!(report["location"], "Oslo");
    assert_eq!(report["description"], "clear sky (demo)");

    // The city is remembered.
    let report = run_json(home.path(), &["weather", "now", "--json"]);
    assert_eq!(report["location"], "Oslo");
}

#[test]
fn test_weather_empty_city_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["weather", "set-city", "  "]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Please enter a city name."));
}

#[test]
fn test_config_get_set() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "25");

    let (_, _, code) = run_cli(home.path(), &["config", "set", "ui.theme", "forest"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "ui.theme"]);
    assert_eq!(stdout.trim(), "forest");

    let (_, stderr, code) = run_cli(home.path(), &["config", "get", "nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_commands_run_without_usable_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path().join("not-a-dir");
    std::fs::write(&home, "occupied").unwrap();

    let cycled = run_json(&home, &["mode", "cycle"]);
    assert_eq!(cycled["mode"], "WORLD_CLOCK");

    let toggled = run_json(&home, &["mode", "toggle-format"]);
    assert_eq!(toggled["format"], "24h");

    let (stdout, stderr, code) = run_cli(&home, &["show"]);
    assert_eq!(code, 0, "show failed: {stderr}");
    assert!(stdout.starts_with("[TIME]"));

    let started = run_json(&home, &["timer", "start"]);
    assert_eq!(started["type"], "timer_started");

    // Nothing persists, so every run starts from the defaults.
    let status = run_json(&home, &["timer", "status"]);
    assert_eq!(status["seconds_remaining"], 1500);
    assert_eq!(status["running"], false);

    let report = run_json(&home, &["weather", "now", "--city", "Oslo", "--json"]);
    assert_eq!(report["location"], "Oslo");
}
