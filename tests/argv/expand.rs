// Integration tests for argv/expand.rs — @file response-file expansion
//
// The fatal paths of `expand_argv` exit the process, so they are exercised
// through `try_expand_argv*` here and through the binary in e2e/.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use respargs::argv::{expand_argv, try_expand_argv, try_expand_argv_with_limit, ArgvError};
use respargs::config::ITERATION_LIMIT;
use tempfile::TempDir;

fn v(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn at(path: &Path) -> String {
    format!("@{}", path.display())
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ─────────────────────────────────────────────────────────────────────────────
// Splicing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn three_tokens_grow_count_by_two() {
    let dir = TempDir::new().unwrap();
    let f = write(&dir, "f", "x y  z\n");
    let argv = vec!["prog".to_owned(), at(&f)];
    let out = expand_argv(&argv).unwrap();
    assert_eq!(out.len(), argv.len() + 2);
    assert_eq!(&*out, v(&["prog", "x", "y", "z"]).as_slice());
}

#[test]
fn empty_file_shrinks_count_by_one() {
    let dir = TempDir::new().unwrap();
    let f = write(&dir, "empty", "");
    let argv = vec!["prog".to_owned(), "a".to_owned(), at(&f), "b".to_owned()];
    let out = expand_argv(&argv).unwrap();
    assert_eq!(&*out, v(&["prog", "a", "b"]).as_slice());
}

#[test]
fn quoted_file_contents_follow_tokenizer_rules() {
    let dir = TempDir::new().unwrap();
    let f = write(&dir, "q", "-D 'NAME=a b'\n\"-I/path with/space\" \\@__respargs_literal__\n");
    let argv = vec!["cc".to_owned(), at(&f), "main.c".to_owned()];
    let out = expand_argv(&argv).unwrap();
    assert_eq!(
        &*out,
        v(&["cc", "-D", "NAME=a b", "-I/path with/space", "@__respargs_literal__", "main.c"])
            .as_slice()
    );
}

#[test]
fn several_response_files_expand_left_to_right() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a", "1 2");
    let b = write(&dir, "b", "3");
    let argv = vec!["p".to_owned(), at(&a), "mid".to_owned(), at(&b)];
    let out = try_expand_argv(&argv).unwrap();
    assert_eq!(&*out, v(&["p", "1", "2", "mid", "3"]).as_slice());
}

#[test]
fn chained_response_files_expand_recursively() {
    let dir = TempDir::new().unwrap();
    let c = write(&dir, "c", "deep");
    let b = write(&dir, "b", &format!("{} b2", at(&c)));
    let a = write(&dir, "a", &format!("a1 {}", at(&b)));
    let argv = vec!["p".to_owned(), at(&a)];
    let out = try_expand_argv(&argv).unwrap();
    assert_eq!(&*out, v(&["p", "a1", "deep", "b2"]).as_slice());
}

#[test]
fn missing_file_inside_response_file_stays_literal() {
    let dir = TempDir::new().unwrap();
    let f = write(&dir, "f", "x @/nonexistent/__respargs_missing__ y");
    let argv = vec!["p".to_owned(), at(&f)];
    let out = try_expand_argv(&argv).unwrap();
    assert_eq!(
        &*out,
        v(&["p", "x", "@/nonexistent/__respargs_missing__", "y"]).as_slice()
    );
}

#[cfg(unix)]
#[test]
fn dev_zero_contributes_no_arguments() {
    let argv = v(&["prog", "a", "@/dev/zero", "b"]);
    let out = try_expand_argv(&argv).unwrap();
    assert_eq!(&*out, v(&["prog", "a", "b"]).as_slice());
}

// ─────────────────────────────────────────────────────────────────────────────
// Ownership
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn untouched_vector_is_returned_borrowed() {
    let argv = v(&["prog", "plain", "@/nonexistent/__respargs_missing__"]);
    let out = expand_argv(&argv).unwrap();
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(&*out, argv.as_slice());
}

#[test]
fn expanded_vector_is_owned_and_original_untouched() {
    let dir = TempDir::new().unwrap();
    let f = write(&dir, "f", "x");
    let argv = vec!["prog".to_owned(), at(&f)];
    let snapshot = argv.clone();
    let out = expand_argv(&argv).unwrap().into_owned();
    assert_eq!(out, ["prog", "x"]);
    assert_eq!(argv, snapshot);
}

// ─────────────────────────────────────────────────────────────────────────────
// Fatal conditions (non-terminating variant)
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn directory_is_reported_with_its_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().to_string_lossy().into_owned();
    let argv = vec!["prog".to_owned(), format!("@{}", path)];
    assert_eq!(
        try_expand_argv(&argv).unwrap_err(),
        ArgvError::DirectoryResponseFile { path }
    );
}

#[test]
fn self_referencing_file_stops_at_default_limit() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("self");
    fs::write(&f, format!("x {}", at(&f))).unwrap();
    let argv = vec!["prog".to_owned(), at(&f)];
    assert_eq!(try_expand_argv(&argv).unwrap_err(), ArgvError::TooManyResponseFiles);
}

#[test]
fn limit_allows_exactly_limit_minus_one_expansions() {
    let dir = TempDir::new().unwrap();
    let f = write(&dir, "f", "x");
    let argv: Vec<String> = std::iter::once("prog".to_owned())
        .chain(std::iter::repeat(at(&f)).take(4))
        .collect();
    let out = try_expand_argv_with_limit(&argv, 5).unwrap();
    assert_eq!(&*out, v(&["prog", "x", "x", "x", "x"]).as_slice());
    assert_eq!(
        try_expand_argv_with_limit(&argv, 4).unwrap_err(),
        ArgvError::TooManyResponseFiles
    );
}

#[test]
fn default_limit_is_2000() {
    assert_eq!(ITERATION_LIMIT, 2000);
}
