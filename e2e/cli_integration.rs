// e2e/cli_integration.rs — CLI integration tests
//
// Tests the `respargs` binary as a black-box CLI tool using std::process::Command.
// Covers the subcommands, --null output, verbosity flags and exit codes.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Locate the `respargs` binary produced by Cargo.
fn respargs_bin() -> PathBuf {
    // CARGO_BIN_EXE_respargs is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_respargs") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("respargs");
    p
}

fn stdout_of(args: &[&str]) -> String {
    let output = Command::new(respargs_bin())
        .args(args)
        .output()
        .expect("failed to run respargs");
    assert!(output.status.success(), "respargs {:?} should exit 0", args);
    String::from_utf8(output.stdout).unwrap()
}

// ── 1. split ─────────────────────────────────────────────────────────────────

#[test]
fn test_cli_split() {
    let out = stdout_of(&["split", "a 'b c'  d\\ e", "\"x\""]);
    assert_eq!(out, "a\nb c\nd e\nx\n");
}

#[test]
fn test_cli_split_empty_string_prints_one_empty_line() {
    assert_eq!(stdout_of(&["split", ""]), "\n");
}

#[test]
fn test_cli_split_null_terminated() {
    assert_eq!(stdout_of(&["split", "-0", "a b"]), "a\0b\0");
}

// ── 2. print ─────────────────────────────────────────────────────────────────

#[test]
fn test_cli_print_passes_arguments_through() {
    assert_eq!(stdout_of(&["print", "-x", "--y=1", "z"]), "-x\n--y=1\nz\n");
}

// ── 3. expand ────────────────────────────────────────────────────────────────

#[test]
fn test_cli_expand_file() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("args.rsp");
    fs::write(&f, "one 'two three'\n").unwrap();
    assert_eq!(stdout_of(&["expand", f.to_str().unwrap()]), "one\ntwo three\n");
}

#[test]
fn test_cli_expand_directory_fails_without_fatal_message() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(respargs_bin())
        .args(["expand", dir.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot expand"), "stderr: {}", stderr);
    assert!(stderr.contains("@-file refers to a directory"), "stderr: {}", stderr);
}

#[test]
fn test_cli_expand_max_files() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("loop.rsp");
    fs::write(&f, format!("@{}", f.display())).unwrap();
    let output = Command::new(respargs_bin())
        .args(["expand", "--max-files", "5", f.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too many @-files encountered"), "stderr: {}", stderr);
}

#[test]
fn test_cli_verbose_traces_expansion() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("args.rsp");
    fs::write(&f, "a b").unwrap();
    let output = Command::new(respargs_bin())
        .args(["-vv", "expand", f.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 argument(s)"), "stderr: {}", stderr);
}

// ── 4. usage errors ──────────────────────────────────────────────────────────

#[test]
fn test_cli_no_subcommand_is_usage_error() {
    let status = Command::new(respargs_bin()).status().unwrap();
    assert!(!status.success());
}

#[test]
fn test_cli_version() {
    let out = stdout_of(&["--version"]);
    assert!(out.starts_with("respargs "), "stdout: {}", out);
}
