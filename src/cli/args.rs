//! Command-line definitions for the `respargs` binary.
//!
//! The process arguments are run through [`crate::argv::expand_argv`] before
//! they reach [`Cli::try_parse_from`], so `@file` arguments may stand anywhere
//! an option or operand may.

use clap::{ArgAction, Parser, Subcommand};

use crate::cli::constants::PROGRAM_NAME;
use crate::cli::help::response_file_help;
use crate::config::ITERATION_LIMIT;

/// Split strings and expand `@file` response files the way a tool's `main`
/// would, without invoking a shell.
#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME, version, after_long_help = response_file_help())]
pub struct Cli {
    /// Verbose mode; repeat for more detail.
    ///
    /// Takes effect after `@FILE` arguments on the command line have been
    /// expanded, so `-vv` traces the `expand` subcommand but not that startup
    /// expansion.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress warnings; repeat to suppress errors too.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split each STRING into arguments and print one per line.
    Split {
        /// Terminate each argument with NUL instead of newline.
        #[arg(short = '0', long)]
        null: bool,

        #[arg(value_name = "STRING", allow_hyphen_values = true)]
        strings: Vec<String>,
    },

    /// Print the remaining arguments, after response-file expansion, one per line.
    Print {
        /// Terminate each argument with NUL instead of newline.
        #[arg(short = '0', long)]
        null: bool,

        #[arg(value_name = "ARG", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Expand each FILE as a response file and print the resulting arguments.
    ///
    /// Unlike `@FILE` on the command line, errors (a directory, too many
    /// nested files) are reported without aborting the parse.
    Expand {
        /// Maximum number of response-file expansions, plus one.
        #[arg(long, value_name = "N", default_value_t = ITERATION_LIMIT)]
        max_files: u32,

        /// Terminate each argument with NUL instead of newline.
        #[arg(short = '0', long)]
        null: bool,

        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,
    },
}
