//! Binary entry point for the `respargs` command-line tool.
//!
//! # Control flow
//!
//! 1. The raw process arguments are passed through
//!    [`respargs::argv::expand_argv`], so every `@file` is replaced by the
//!    arguments it contains.  A directory `@file` or runaway nesting ends the
//!    process there with status 1.
//! 2. The expanded vector is parsed by clap into a [`Cli`].
//! 3. [`run`] executes the subcommand against stdout.

use std::io;

use clap::Parser;

use respargs::argv::expand_argv;
use respargs::cli::args::Cli;
use respargs::cli::constants::{display_level_from_flags, set_display_level, PROGRAM_NAME};
use respargs::cli::dispatch::run;
use respargs::cli::help::error_out;

fn main() {
    let raw: Vec<String> = std::env::args().collect();
    let args = match expand_argv(&raw) {
        Ok(args) => args,
        Err(e) => error_out(raw.first().map(String::as_str).unwrap_or(PROGRAM_NAME), &e.to_string()),
    };

    let cli = Cli::parse_from(args.iter());
    set_display_level(display_level_from_flags(cli.verbose, cli.quiet));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(cli.command, &mut out) {
        error_out(PROGRAM_NAME, &format!("{:#}", e));
    }
}
