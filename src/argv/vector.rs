//! Duplicate and release argument vectors.
//!
//! Thin helpers the expander relies on when it takes ownership of the
//! caller's vector on first mutation.

use crate::argv::error::ArgvError;

/// Deep-copies `argv` into newly owned storage.
///
/// Returns `Ok(None)` for `None`.  Every element is copied, so the result
/// never aliases the source.
pub fn dup_argv(argv: Option<&[String]>) -> Result<Option<Vec<String>>, ArgvError> {
    let Some(argv) = argv else {
        return Ok(None);
    };

    let mut copy = Vec::new();
    copy.try_reserve_exact(argv.len())?;
    for arg in argv {
        let mut owned = String::new();
        owned.try_reserve_exact(arg.len())?;
        owned.push_str(arg);
        copy.push(owned);
    }
    Ok(Some(copy))
}

/// Releases every argument and the vector itself.  `None` is a no-op.
pub fn free_argv(argv: Option<Vec<String>>) {
    drop(argv);
}

/// Number of arguments in `argv`.
#[inline]
pub fn count_argv(argv: &[String]) -> usize {
    argv.len()
}
