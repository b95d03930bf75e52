//! Executes a parsed [`Command`].
//!
//! Output goes to a caller-supplied writer so the commands can be exercised
//! from tests without capturing the process's stdout.

use std::io::Write;

use anyhow::Context;

use crate::argv::{build_argv, try_expand_argv_with_limit};
use crate::cli::args::Command;
use crate::cli::constants::{LINE_TERMINATOR, NUL_TERMINATOR, PROGRAM_NAME};
use crate::config::RESPONSE_FILE_PREFIX;
use crate::displaylevel;

fn write_args<W: Write, S: AsRef<str>>(out: &mut W, args: &[S], null: bool) -> anyhow::Result<()> {
    let terminator = if null { NUL_TERMINATOR } else { LINE_TERMINATOR };
    for arg in args {
        out.write_all(arg.as_ref().as_bytes())?;
        out.write_all(&[terminator])?;
    }
    out.flush()?;
    Ok(())
}

/// Runs `command`, writing its arguments to `out`.
pub fn run<W: Write>(command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Split { null, strings } => {
            for s in &strings {
                let argv = build_argv(s).with_context(|| format!("cannot split {:?}", s))?;
                displaylevel!(4, "{:?} -> {} argument(s)\n", s, argv.len());
                write_args(out, argv.as_slice(), null)?;
            }
        }
        Command::Print { null, args } => {
            write_args(out, args.as_slice(), null)?;
        }
        Command::Expand { max_files, null, files } => {
            let mut argv = Vec::with_capacity(files.len() + 1);
            argv.push(PROGRAM_NAME.to_owned());
            argv.extend(files.iter().map(|f| format!("{}{}", RESPONSE_FILE_PREFIX, f)));

            let expanded = try_expand_argv_with_limit(&argv, max_files)
                .with_context(|| format!("cannot expand {}", files.join(" ")))?;
            write_args(out, &expanded[1..], null)?;
        }
    }
    Ok(())
}
