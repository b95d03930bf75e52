// Integration tests for cli/args.rs — clap definitions, fed with argument
// vectors that have already been through response-file expansion.

use std::fs;

use clap::Parser;
use respargs::argv::expand_argv;
use respargs::cli::args::{Cli, Command};
use tempfile::TempDir;

#[test]
fn options_can_come_from_a_response_file() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("opts");
    fs::write(&f, "-v split --null").unwrap();

    let raw = vec![
        "respargs".to_owned(),
        format!("@{}", f.display()),
        "a b".to_owned(),
    ];
    let args = expand_argv(&raw).unwrap();
    let cli = Cli::try_parse_from(args.iter()).unwrap();

    assert_eq!(cli.verbose, 1);
    match cli.command {
        Command::Split { null, strings } => {
            assert!(null);
            assert_eq!(strings, ["a b"]);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["respargs", "frobnicate"]).is_err());
}

#[test]
fn max_files_must_be_numeric() {
    assert!(Cli::try_parse_from(["respargs", "expand", "--max-files", "lots", "f"]).is_err());
}
