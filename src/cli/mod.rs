//! Command-line interface for the `respargs` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, the `DISPLAY_LEVEL` atomic and the `display!` / `displaylevel!` macros. |
//! | [`help`]      | Long help text and the `error_out` exit helper. |
//! | [`args`]      | clap definitions: [`args::Cli`] and its subcommands. |
//! | [`dispatch`]  | [`dispatch::run`] — executes a parsed command against an output stream. |
//!
//! Typical call sequence: `expand_argv` on the raw process arguments →
//! `Cli::parse_from` → `run`.

pub mod constants;
pub mod help;
pub mod args;
pub mod dispatch;
