//! Integration tests for the colorstr CLI

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{run_colorstr, temp_config};

// ============================================================================
// Paint
// ============================================================================

#[test]
fn paint_renders_requested_styles() {
    let (stdout, _stderr, exit_code) = run_colorstr(&["paint", "hi", "-s", "red", "-s", "bold"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[31;1mhi\x1b[0m\n");
}

#[test]
fn paint_without_styles_is_reset_wrapped() {
    let (stdout, _stderr, exit_code) = run_colorstr(&["paint", "hi"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[0mhi\x1b[0m\n");
}

#[test]
fn paint_no_color_flag_prints_plain_text() {
    let (stdout, _stderr, exit_code) =
        run_colorstr(&["paint", "hi", "-s", "red", "--no-color"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "hi\n");
}

#[test]
fn paint_invalid_style_exits_1_and_names_it() {
    let (stdout, stderr, exit_code) =
        run_colorstr(&["paint", "hi", "-s", "red", "-s", "purple", "-s", "f_bold"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid style name(s)"), "stderr: {}", stderr);
    assert!(stderr.contains("purple"));
    assert!(stderr.contains("f_bold"));
}

#[test]
fn no_color_env_disables_color() {
    let (_dir, config) = temp_config("");
    Command::cargo_bin("colorstr")
        .unwrap()
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config)
        .args(["paint", "hi", "-s", "green"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn config_file_can_disable_color() {
    let (_dir, config) = temp_config("color = \"never\"\n");
    Command::cargo_bin("colorstr")
        .unwrap()
        .env_remove("NO_COLOR")
        .arg("--config")
        .arg(&config)
        .args(["paint", "hi", "-s", "green"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn broken_config_file_is_reported() {
    let (_dir, config) = temp_config("color = [");
    Command::cargo_bin("colorstr")
        .unwrap()
        .env_remove("NO_COLOR")
        .arg("--config")
        .arg(&config)
        .args(["paint", "hi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"));
}

// ============================================================================
// Strip
// ============================================================================

#[test]
fn strip_argument() {
    let (stdout, _stderr, exit_code) =
        run_colorstr(&["strip", "\x1b[1;31mbold red\x1b[0m and plain"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "bold red and plain\n");
}

#[test]
fn strip_reads_stdin() {
    let (_dir, config) = temp_config("");
    Command::cargo_bin("colorstr")
        .unwrap()
        .env_remove("NO_COLOR")
        .arg("--config")
        .arg(&config)
        .arg("strip")
        .write_stdin("\x1b[32mone\x1b[0m\n\x1b[4;34mtwo\x1b[0m\n")
        .assert()
        .success()
        .stdout("one\ntwo\n");
}

// ============================================================================
// Styles and demo
// ============================================================================

#[test]
fn styles_lists_registry() {
    let (stdout, _stderr, exit_code) = run_colorstr(&["styles", "--no-color"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 30);
    assert!(stdout.lines().any(|line| line.split_whitespace().eq(["bold", "1", "bold"])));
    assert!(stdout
        .lines()
        .any(|line| line.split_whitespace().eq(["b_white", "47", "b_white"])));
}

#[test]
fn demo_runs() {
    let (stdout, stderr, exit_code) = run_colorstr(&["demo"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("green string"));
    assert!(stdout.contains("\x1b["));
}

#[test]
fn demo_without_color_has_no_escapes() {
    let (stdout, _stderr, exit_code) = run_colorstr(&["demo", "--no-color"]);

    assert_eq!(exit_code, 0);
    assert!(!stdout.contains('\x1b'));
    assert!(stdout.contains("az 0 I am foo"));
}

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_colorstr(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["demo", "paint", "strip", "styles"] {
        assert!(stdout.contains(command), "missing {}: {}", command, stdout);
    }
}

#[test]
fn missing_subcommand_exits_2() {
    let (_stdout, stderr, exit_code) = run_colorstr(&[]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}
