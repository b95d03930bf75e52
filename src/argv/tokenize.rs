//! String → argument vector splitting.
//!
//! [`build_argv`] splits a string into fields separated by whitespace.  A
//! field may be wrapped, in whole or in part, in single or double quotes,
//! which are stripped.  A backslash copies the following character verbatim
//! and is itself dropped.
//!
//! # Quoting rules
//!
//! * Whitespace is the C-locale `isspace` set (see [`is_arg_space`]).  A run of
//!   it separates fields only outside quotes and not directly after a
//!   pending backslash.
//! * `'` or `"` outside quotes opens that quote mode; the same character closes
//!   it.  Only one mode is active at a time, so `"it's"` yields `it's`.
//! * Backslash escaping is checked *before* quote mode, so `\` escapes the next
//!   character even inside single quotes.  This is not POSIX behaviour.
//! * An unterminated quote ends silently at end of input.  A trailing lone
//!   backslash is dropped.
//!
//! Empty or whitespace-only input yields one empty argument, not zero.  The
//! response-file expander special-cases whitespace-only files to mean zero
//! arguments via [`only_whitespace`]; the two rules are intentionally distinct.

use std::iter::Peekable;
use std::str::Chars;

use crate::argv::error::ArgvError;
use crate::config::INITIAL_MAXARGC;

/// Active quote mode of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Returns `true` for the characters C's `isspace` accepts in the "C" locale:
/// space, `\t`, `\n`, `\v`, `\f` and `\r`.
///
/// `char::is_ascii_whitespace` is not used because it excludes `\v`.
#[inline]
pub fn is_arg_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Returns `true` if `input` is empty or consists only of [`is_arg_space`]
/// characters.
pub fn only_whitespace(input: &str) -> bool {
    input.chars().all(is_arg_space)
}

fn consume_whitespace(input: &mut Peekable<Chars<'_>>) {
    while input.next_if(|&c| is_arg_space(c)).is_some() {}
}

/// Appends `arg` to `argv`, doubling the vector's capacity when it is full.
fn push_arg(argv: &mut Vec<String>, arg: &str) -> Result<(), ArgvError> {
    if argv.len() == argv.capacity() {
        let grow = argv.capacity().max(INITIAL_MAXARGC);
        argv.try_reserve_exact(grow)?;
    }
    let mut owned = String::new();
    owned.try_reserve_exact(arg.len())?;
    owned.push_str(arg);
    argv.push(owned);
    Ok(())
}

/// Splits `input` into an argument vector.
///
/// Always returns at least one argument; see the module documentation for the
/// full grammar.  The input is not modified.  The only failure is
/// [`ArgvError::AllocationFailed`].
///
/// ```
/// use respargs::argv::build_argv;
///
/// assert_eq!(build_argv("'a b' c").unwrap(), ["a b", "c"]);
/// assert_eq!(build_argv("").unwrap(), [""]);
/// ```
pub fn build_argv(input: &str) -> Result<Vec<String>, ArgvError> {
    let mut quote = Quote::None;
    let mut escaped = false;
    let mut argv: Vec<String> = Vec::new();

    // An extracted argument is never longer than the input, so the scratch
    // buffer never reallocates once reserved.
    let mut copybuf = String::new();
    copybuf.try_reserve_exact(input.len())?;

    let mut chars = input.chars().peekable();
    loop {
        consume_whitespace(&mut chars);

        copybuf.clear();
        while let Some(&c) = chars.peek() {
            if is_arg_space(c) && quote == Quote::None && !escaped {
                break;
            }
            if escaped {
                escaped = false;
                copybuf.push(c);
            } else if c == '\\' {
                escaped = true;
            } else {
                match (quote, c) {
                    (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
                    (Quote::None, '\'') => quote = Quote::Single,
                    (Quote::None, '"') => quote = Quote::Double,
                    _ => copybuf.push(c),
                }
            }
            chars.next();
        }
        push_arg(&mut argv, &copybuf)?;

        consume_whitespace(&mut chars);
        if chars.peek().is_none() {
            break;
        }
    }

    Ok(argv)
}
