//! Response-file (`@file`) expansion.
//!
//! Any argument after `argv[0]` whose first character is `@` names a response
//! file.  The file is read, split with [`build_argv`], and its arguments
//! replace the `@file` argument in place.  The same position is then examined
//! again, so response files may reference further response files; a single
//! counter bounds the total number of expansions per call.
//!
//! | Situation                               | Outcome                                   |
//! |-----------------------------------------|-------------------------------------------|
//! | `@path` names a directory               | fatal: `@-file refers to a directory`     |
//! | counter reaches zero                    | fatal: `too many @-files encountered`     |
//! | `@path` cannot be opened or read        | argument kept verbatim, scan moves on     |
//! | file empty or whitespace-only           | argument removed, nothing inserted        |
//! | otherwise                               | argument replaced by the file's arguments |
//!
//! [`expand_argv`] prints the fatal diagnostics and exits with status 1.
//! [`try_expand_argv`] returns them as [`ArgvError`] values instead.
//!
//! The caller's vector is borrowed until the first splice, at which point it
//! is duplicated with [`dup_argv`] and the result becomes [`Cow::Owned`].  A
//! vector with nothing to expand comes back as [`Cow::Borrowed`].

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::argv::error::ArgvError;
use crate::argv::tokenize::{build_argv, only_whitespace};
use crate::argv::vector::dup_argv;
use crate::config::{ITERATION_LIMIT, RESPONSE_FILE_PREFIX};
use crate::util::is_directory;
use crate::{display, displaylevel};

/// Reads the response file at `path`, up to the size it reports when opened.
///
/// Returns `Ok(None)` when the file cannot be opened, stat'ed or read; the
/// caller then treats the argument as an ordinary one.  Bytes appended after
/// the open, and the endless output of device files such as `/dev/zero`
/// (which report a size of 0), are not read.  The handle is closed on return.
fn read_response_file(path: &Path) -> Result<Option<String>, ArgvError> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            displaylevel!(4, "@-file {}: cannot open ({}), kept as argument\n", path.display(), e);
            return Ok(None);
        }
    };

    let len = match file.metadata() {
        Ok(m) => m.len(),
        Err(e) => {
            displaylevel!(4, "@-file {}: cannot stat ({}), kept as argument\n", path.display(), e);
            return Ok(None);
        }
    };
    let mut raw = Vec::new();
    raw.try_reserve_exact(usize::try_from(len).map_err(|_| ArgvError::AllocationFailed)?)?;
    if let Err(e) = (&mut file).take(len).read_to_end(&mut raw) {
        displaylevel!(4, "@-file {}: read error ({}), kept as argument\n", path.display(), e);
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
}

/// Expands `@file` arguments with a caller-chosen iteration limit.
///
/// The limit is pre-decremented before every expansion attempt, so a limit of
/// `n` processes at most `n - 1` response files.  A limit of 0 behaves like 1.
pub fn try_expand_argv_with_limit(
    argv: &[String],
    limit: u32,
) -> Result<Cow<'_, [String]>, ArgvError> {
    let mut args: Cow<'_, [String]> = Cow::Borrowed(argv);
    let mut remaining = limit;

    // argv[0] is the program name and is never expanded.
    let mut i = 1;
    while i < args.len() {
        let Some(filename) = args[i].strip_prefix(RESPONSE_FILE_PREFIX) else {
            i += 1;
            continue;
        };
        let filename = filename.to_owned();
        let path = Path::new(&filename);

        if is_directory(path) {
            return Err(ArgvError::DirectoryResponseFile { path: filename });
        }

        remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            return Err(ArgvError::TooManyResponseFiles);
        }

        let Some(contents) = read_response_file(path)? else {
            i += 1;
            continue;
        };

        let file_argv = if only_whitespace(&contents) {
            Vec::new()
        } else {
            build_argv(&contents)?
        };
        displaylevel!(
            4,
            "@-file {}: {} argument(s) at position {}\n",
            filename,
            file_argv.len(),
            i
        );

        if let Cow::Borrowed(original) = args {
            args = Cow::Owned(dup_argv(Some(original))?.unwrap_or_default());
        }
        let owned = args.to_mut();
        owned.try_reserve(file_argv.len().saturating_sub(1))?;
        owned.splice(i..=i, file_argv);

        // Re-examine position `i`: the first inserted argument may itself be
        // an `@file` reference.
    }

    Ok(args)
}

/// Expands `@file` arguments, returning the fatal conditions as errors.
///
/// Uses [`ITERATION_LIMIT`] as the expansion bound.
pub fn try_expand_argv(argv: &[String]) -> Result<Cow<'_, [String]>, ArgvError> {
    try_expand_argv_with_limit(argv, ITERATION_LIMIT)
}

/// Expands `@file` arguments, terminating the process on fatal conditions.
///
/// On a directory `@file` or on exceeding the iteration limit, prints
/// `"<argv0>: error: <message>"` to stderr and exits with status 1.
/// Allocation failure is returned to the caller.
///
/// Typically called once near the start of `main`, before option parsing:
///
/// ```no_run
/// let args: Vec<String> = std::env::args().collect();
/// let args = respargs::argv::expand_argv(&args)?;
/// # Ok::<(), respargs::argv::ArgvError>(())
/// ```
pub fn expand_argv(argv: &[String]) -> Result<Cow<'_, [String]>, ArgvError> {
    match try_expand_argv(argv) {
        Err(e) if e.is_fatal() => {
            let argv0 = argv.first().map(String::as_str).unwrap_or_default();
            display!("{}: error: {}\n", argv0, e);
            std::process::exit(1);
        }
        other => other,
    }
}
