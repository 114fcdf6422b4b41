//! Integration tests for the seekctl CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{empty_config_home, run_seekctl};

fn seekctl() -> Command {
    let mut cmd = Command::cargo_bin("seekctl").unwrap();
    cmd.env("XDG_CONFIG_HOME", empty_config_home())
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Resume
// ============================================================================

#[test]
fn resume_inside_item_prints_stored_position() {
    let (stdout, _stderr, exit_code) =
        run_seekctl(&["resume", "--duration", "120", "--stored", "45"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "45");
}

#[test]
fn resume_at_end_prints_zero() {
    let (stdout, _stderr, exit_code) =
        run_seekctl(&["resume", "--duration", "1.25", "--stored", "1.25"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "0");
}

#[test]
fn resume_without_stored_prints_zero() {
    let (stdout, _stderr, exit_code) = run_seekctl(&["resume", "--duration", "1.25"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "0");
}

#[test]
fn resume_with_unknown_duration_prints_zero() {
    let (stdout, _stderr, exit_code) =
        run_seekctl(&["resume", "--duration", "NaN", "--stored", "5"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "0");
}

#[test]
fn resume_requires_duration() {
    let (_stdout, stderr, exit_code) = run_seekctl(&["resume", "--stored", "5"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--duration"));
}

// ============================================================================
// Simulate
// ============================================================================

#[test]
fn simulate_seek_past_end_stays_at_end() {
    let (stdout, stderr, exit_code) = run_seekctl(&[
        "simulate",
        "--duration",
        "120",
        "--start",
        "100",
        "play:5",
        "hold:fwd",
        "tick:5",
    ]);
    assert_eq!(exit_code, 0, "stderr: {stderr}");
    insta::assert_snapshot!(stdout, @r"
    play:5     position= 105.000 playing hold=idle
    hold:fwd   position= 115.000 playing hold=Forward
    tick:5     position= 120.000 paused  hold=idle ended=Ignored
    ");
}

#[test]
fn simulate_accepts_comma_separated_steps() {
    seekctl()
        .args(["simulate", "--duration", "60", "tap:fwd,tap:fwd,tap:back"])
        .assert()
        .success()
        .stdout(predicate::str::contains("position=  10.000"));
}

#[test]
fn simulate_json_reports_each_step() {
    let (stdout, _stderr, exit_code) = run_seekctl(&[
        "simulate",
        "--duration",
        "20",
        "--start",
        "15",
        "--json",
        "tap:fwd",
    ]);
    assert_eq!(exit_code, 0);

    let reports: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let report = &reports[0];
    assert_eq!(report["step"], "tap:fwd");
    assert_eq!(report["position"], 20.0);
    assert_eq!(report["paused"], true);
    assert_eq!(report["ended"], "ignored");
    assert_eq!(report["seeks"][0]["boundary"], "end");
    assert_eq!(report["seeks"][0]["paused"], true);
    assert_eq!(report["hold"]["state"], "idle");
}

#[test]
fn simulate_rejects_unknown_step() {
    seekctl()
        .args(["simulate", "--duration", "60", "jump:fwd"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid script"))
        .stderr(predicate::str::contains("jump:fwd"));
}

#[test]
fn simulate_uses_step_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[seek]\nstep_secs = 2.5\n").unwrap();

    seekctl()
        .args(["--config", path.to_str().unwrap()])
        .args(["simulate", "--duration", "60", "tap:fwd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("position=   2.500"));
}

#[test]
fn invalid_config_file_fails_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[seek]\nrepeat_interval_ms = 0\n").unwrap();

    seekctl()
        .args(["--config", path.to_str().unwrap()])
        .args(["simulate", "--duration", "60", "tap:fwd"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn simulate_negative_start_clamps_to_zero() {
    seekctl()
        .args(["simulate", "--duration", "60", "--start", "-5", "tap:back"])
        .assert()
        .success()
        .stdout(predicate::str::contains("position=   0.000"));
}

#[test]
fn simulate_huge_play_is_rejected_without_panic() {
    seekctl()
        .args(["simulate", "--duration", "120", "play:1e20"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid number of seconds '1e20'"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn simulate_oversized_tick_count_is_rejected() {
    seekctl()
        .args(["simulate", "--duration", "NaN", "hold:fwd", "tick:4294967295"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid tick count"));
}

#[test]
fn simulate_long_hold_on_unknown_duration_finishes() {
    let (stdout, _stderr, exit_code) = run_seekctl(&[
        "simulate",
        "--duration",
        "NaN",
        "hold:fwd",
        "tick:10000",
        "release",
    ]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("position=100010.000"));
}

// ============================================================================
// Config and completions
// ============================================================================

#[test]
fn config_init_writes_defaults_then_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seekctl").join("config.toml");
    let path_arg = path.to_str().unwrap();

    seekctl()
        .args(["--config", path_arg, "config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("step_secs = 10.0"));

    seekctl()
        .args(["--config", path_arg, "config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    std::fs::write(&path, "[seek]\nstep_secs = 3.0\n").unwrap();
    seekctl()
        .args(["--config", path_arg, "config", "init", "--force"])
        .assert()
        .success();
    let rewritten = std::fs::read_to_string(&path).unwrap();
    assert!(rewritten.contains("step_secs = 10.0"));
}

#[test]
fn config_show_prints_defaults() {
    let (stdout, _stderr, exit_code) = run_seekctl(&["config", "show"]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
    [seek]
    step_secs = 10.0
    repeat_interval_ms = 1000
    immediate_step = true
    ");
}

#[test]
fn config_path_ends_with_seekctl_config() {
    seekctl()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seekctl").and(predicate::str::contains("config.toml")));
}

#[test]
fn completions_for_bash_mention_subcommands() {
    seekctl()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("resume"));
}

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_seekctl(&["--help"]);
    assert_eq!(exit_code, 0);
    for sub in ["resume", "simulate", "play", "config", "completions"] {
        assert!(stdout.contains(sub), "missing {sub} in help");
    }
}
