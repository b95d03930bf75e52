// e2e/response_files.rs — @file expansion of the binary's own arguments
//
// The terminating variant exits the process, so its fatal diagnostics and
// exit status can only be observed from outside.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn respargs_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_respargs") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("respargs");
    p
}

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(respargs_bin())
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("failed to run respargs")
}

#[test]
fn response_file_replaces_argument() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("f"), "x y  z\n").unwrap();
    let out = run_in(&dir, &["print", "a", "@f", "b"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "a\nx\ny\nz\nb\n");
}

#[test]
fn subcommand_may_come_from_response_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cmd"), "split --null").unwrap();
    let out = run_in(&dir, &["@cmd", "p q"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"p\0q\0");
}

#[test]
fn whitespace_only_file_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("blank"), "  \n\t\n").unwrap();
    let out = run_in(&dir, &["print", "a", "@blank", "b"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "a\nb\n");
}

#[test]
fn missing_file_is_passed_through() {
    let dir = TempDir::new().unwrap();
    let out = run_in(&dir, &["print", "@missing"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "@missing\n");
    assert!(out.stderr.is_empty());
}

#[test]
fn nested_response_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("inner"), "'two words'").unwrap();
    fs::write(dir.path().join("outer"), "one @inner three").unwrap();
    let out = run_in(&dir, &["print", "@outer"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "one\ntwo words\nthree\n");
}

#[test]
fn directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let bin = respargs_bin();
    let out = run_in(&dir, &["print", "@sub"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let expected = format!("{}: error: @-file refers to a directory\n", bin.display());
    assert_eq!(String::from_utf8_lossy(&out.stderr), expected);
}

#[test]
fn self_reference_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("loop"), "x @loop").unwrap();
    let bin = respargs_bin();
    let out = run_in(&dir, &["print", "@loop"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let expected = format!("{}: error: too many @-files encountered\n", bin.display());
    assert_eq!(String::from_utf8_lossy(&out.stderr), expected);
}

#[test]
fn mutual_reference_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a"), "@b").unwrap();
    fs::write(dir.path().join("b"), "@a").unwrap();
    let out = run_in(&dir, &["print", "@a"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("too many @-files encountered"));
}
