//! Basic CLI E2E tests.
//!
//! Tests invoke the binary via cargo run and verify outputs. Only the
//! non-interactive surfaces are exercised; a real session needs a tty.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    run_cli_in(args, None)
}

/// Same, with HOME pointed somewhere disposable for config commands.
fn run_cli_in(args: &[&str], home: Option<&Path>) -> (String, String, i32) {
    let mut command = Command::new("cargo");
    command
        .args(["run", "-p", "breathe-cli", "--quiet", "--"])
        .args(args);
    if let Some(home) = home {
        // Keep cargo's own registry where it is; only the app's config
        // lookup should move.
        let cargo_home = std::env::var("CARGO_HOME").unwrap_or_else(|_| {
            format!("{}/.cargo", std::env::var("HOME").unwrap_or_default())
        });
        command.env("CARGO_HOME", cargo_home).env("HOME", home);
    }
    let output = command.output().expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_list_names_every_preset() {
    let (stdout, _, code) = run_cli(&["list"]);
    assert_eq!(code, 0, "list failed");
    for name in ["box", "478", "relax", "focus", "calm", "sleep", "energize"] {
        assert!(stdout.contains(name), "missing preset '{name}'");
    }
}

#[test]
fn test_list_elides_zero_holds() {
    let (stdout, _, code) = run_cli(&["list"]);
    assert_eq!(code, 0);
    let energize = stdout
        .lines()
        .find(|l| l.contains("energize"))
        .expect("energize line");
    assert!(energize.contains("Inhale 3"));
    assert!(energize.contains("Exhale 3"));
    assert!(!energize.contains("Hold"));
}

#[test]
fn test_help_shows_usage() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0, "--help failed");
    assert!(stdout.contains("breathe"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("manual"));
}

#[test]
fn test_unknown_mode_fails() {
    let (_, stderr, code) = run_cli(&["zen"]);
    assert_ne!(code, 0, "unknown mode unexpectedly succeeded");
    assert!(stderr.contains("Unknown preset"));
}

#[test]
fn test_manual_requires_all_durations() {
    let (_, _, code) = run_cli(&["manual", "60", "4"]);
    assert_ne!(code, 0, "incomplete manual spec unexpectedly succeeded");
}

#[test]
fn test_manual_rejects_all_zero_cycle() {
    let (_, stderr, code) = run_cli(&["manual", "60", "0", "0", "0", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("positive duration"));
}

#[test]
fn test_manual_rejects_negative_durations() {
    let (_, _, code) = run_cli(&["manual", "60", "-4", "3", "5", "3"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_list_shows_defaults() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli_in(&["config", "list"], Some(home.path()));
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("sound.enabled = true"));
    assert!(stdout.contains("session.total_seconds = 300"));
}

#[test]
fn test_config_set_then_get_round_trips() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli_in(
        &["config", "set", "session.total_seconds", "600"],
        Some(home.path()),
    );
    assert_eq!(code, 0, "config set failed");

    let (stdout, _, code) = run_cli_in(&["config", "get", "session.total_seconds"], Some(home.path()));
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "600");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli_in(&["config", "get", "sound.volume"], Some(home.path()));
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_config_reset_restores_defaults() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli_in(
        &["config", "set", "sound.enabled", "false"],
        Some(home.path()),
    );
    assert_eq!(code, 0);

    let (_, _, code) = run_cli_in(&["config", "reset"], Some(home.path()));
    assert_eq!(code, 0, "config reset failed");

    let (stdout, _, code) = run_cli_in(&["config", "get", "sound.enabled"], Some(home.path()));
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "true");
}
