//! Prompt integration tests
//!
//! These tests drive the prompts through real child processes, using small
//! shell scripts that stand in for the `gum` binary.

#![cfg(unix)]

use gum::prelude::*;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write an executable `gum` stand-in that records its arguments and then runs `body`.
fn fake_gum(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("gum");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"{}\"\n{}\n",
        dir.join("args.txt").display(),
        body
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn recorded_args(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("args.txt"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_choose_through_real_process() {
    let temp_dir = TempDir::new().unwrap();
    let binary = fake_gum(temp_dir.path(), "echo b");
    let gum = Gum::with_runner(binary.to_string_lossy(), SystemRunner);

    let selection = gum.choose(&["a", "b", "c"], None).unwrap();
    assert_eq!(selection, Selection { index: 1, selection: "b" });
    assert_eq!(
        recorded_args(temp_dir.path()),
        ["choose", "--limit=1", "a", "b", "c"]
    );
}

#[test]
fn test_choose_multiple_through_real_process() {
    let temp_dir = TempDir::new().unwrap();
    let binary = fake_gum(temp_dir.path(), "printf 'a\\nc\\n'");
    let gum = Gum::with_runner(binary.to_string_lossy(), SystemRunner);

    let indexes: Vec<usize> = gum
        .choose_multiple(&["a", "b", "c"], None)
        .unwrap()
        .into_iter()
        .map(|s| s.index)
        .collect();
    assert_eq!(indexes, [0, 2]);
    assert!(recorded_args(temp_dir.path()).contains(&"--no-limit".to_string()));
}

#[test]
fn test_confirm_exit_status() {
    let temp_dir = TempDir::new().unwrap();
    let binary = fake_gum(temp_dir.path(), "exit 1");
    let gum = Gum::with_runner(binary.to_string_lossy(), SystemRunner);

    assert!(!gum.confirm("Proceed?", &ConfirmOptions::default()).unwrap());

    let strict = ConfirmOptions {
        strict: true,
        ..ConfirmOptions::default()
    };
    let err = gum.confirm("Proceed?", &strict).unwrap_err();
    assert_eq!(err.exit_code(), Some(1));
}

#[test]
fn test_filter_reads_candidates_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    // Pick the first piped line containing "an".
    let binary = fake_gum(temp_dir.path(), "grep an | head -n 1");
    let gum = Gum::with_runner(binary.to_string_lossy(), SystemRunner);

    let picked = gum.filter(&["apple", "banana", "mango"], "").unwrap();
    assert_eq!(picked, Selection { index: 1, selection: "banana" });
    assert_eq!(recorded_args(temp_dir.path()), ["filter", "--limit=1"]);
}

#[test]
fn test_input_default_when_nothing_typed() {
    let temp_dir = TempDir::new().unwrap();
    let binary = fake_gum(temp_dir.path(), "true");
    let gum = Gum::with_runner(binary.to_string_lossy(), SystemRunner);

    assert_eq!(gum.input("Name", "x").unwrap(), "x");
    assert_eq!(
        recorded_args(temp_dir.path()),
        ["input", "--placeholder=x", "--prompt=Name: "]
    );
}

#[test]
fn test_style_keeps_leading_margin() {
    let temp_dir = TempDir::new().unwrap();
    let binary = fake_gum(temp_dir.path(), "printf '\\n  hi\\n'");
    let gum = Gum::with_runner(binary.to_string_lossy(), SystemRunner);

    let style = StyleConfig {
        margin: Some(vec![1, 2]),
        ..StyleConfig::default()
    };
    assert_eq!(gum.style("hi", Some(&style)).unwrap(), "\n  hi");
    assert_eq!(recorded_args(temp_dir.path()), ["style", "--margin=1 2", "hi"]);
}

#[test]
fn test_spin_runs_wrapped_command() {
    let temp_dir = TempDir::new().unwrap();
    // Skip everything up to the passthrough marker and run the rest.
    let binary = fake_gum(
        temp_dir.path(),
        "while [ \"$1\" != \"--\" ]; do shift; done\nshift\nexec \"$@\"",
    );
    let gum = Gum::with_runner(binary.to_string_lossy(), SystemRunner);

    let mut wrapped = ShellCommand::new(["echo"]);
    wrapped.add_positional_args(["spun"]);

    let spin = SpinConfig {
        title: Some("Working".to_string()),
        show_output: true,
        ..SpinConfig::default()
    };
    let result = gum.spin(&wrapped, Some(&spin)).unwrap();
    assert!(result.passed);
    assert_eq!(result.text(), "spun");
    assert_eq!(
        recorded_args(temp_dir.path()),
        ["spin", "--title=Working", "--show-output", "--", "echo", "spun"]
    );
}
