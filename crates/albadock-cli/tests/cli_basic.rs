//! E2E tests for the CLI surface that avoid touching the user's store:
//! only --demo and pure subcommands are exercised.

use std::process::Command;

fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "albadock-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(args);
    if code != 0 && !stderr.is_empty() {
        eprintln!("CLI error output: {}", stderr);
    }
    assert_eq!(code, 0, "CLI command failed with code {}: {:?}", code, args);
    stdout
}

#[test]
fn help_lists_subcommands() {
    let stdout = run_cli_success(&["--help"]);
    for cmd in ["alarm", "due", "gate", "ring", "stimulus", "config"] {
        assert!(stdout.contains(cmd), "help missing '{cmd}': {stdout}");
    }
}

#[test]
fn stimulus_reports_the_ramp_midpoint() {
    let stdout = run_cli_success(&["stimulus", "--elapsed-ms", "12500"]);
    let sample: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!((sample["gain"].as_f64().unwrap() - 0.06).abs() < 1e-9);
    assert_eq!(sample["frequency_hz"].as_f64().unwrap(), 400.0);
}

#[test]
fn stimulus_rejects_unknown_sound() {
    let (_, stderr, code) = run_cli(&["stimulus", "--elapsed-ms", "0", "--sound", "thunder"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown sound"));
}

#[test]
fn gate_demo_prompts_for_the_seeded_alarm() {
    let stdout = run_cli_success(&["gate", "check", "--demo"]);
    // First line is the event, the rest is the prompt itself.
    let (first, rest) = stdout.split_once('\n').unwrap();
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert_eq!(event["type"], "HolidayPromptShown");
    assert_eq!(event["target_date"], "2026-01-21");
    let prompt: serde_json::Value = serde_json::from_str(rest).unwrap();
    assert_eq!(prompt["targetDate"], "2026-01-21");
    assert_eq!(prompt["alarm"]["time"], "06:30");
    assert_eq!(event["alarm_id"], prompt["alarm"]["id"]);
}

#[test]
fn gate_demo_respects_resolved_dates() {
    let stdout = run_cli_success(&["gate", "check", "--demo", "--resolved", "2026-01-21"]);
    assert_eq!(stdout.trim(), "null");
}

#[test]
fn ring_demo_confirms_after_sustained_hold() {
    let stdout = run_cli_success(&["ring", "--demo"]);
    assert!(stdout.contains("\"RingingStarted\""));
    assert!(stdout.contains("\"HoldReleased\""));
    assert!(stdout.contains("\"WakeConfirmed\""));
    let confirmations = stdout.matches("\"WakeConfirmed\"").count();
    assert_eq!(confirmations, 1);
}

#[test]
fn ring_demo_without_partial_hold_skips_the_release() {
    let stdout = run_cli_success(&["ring", "--demo", "--partial-hold-ms", "0"]);
    assert!(!stdout.contains("\"HoldReleased\""));
    assert!(stdout.contains("\"WakeConfirmed\""));
}
