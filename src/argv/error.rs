//! Error type shared by the tokenizer, the vector helpers and the
//! response-file expander.

use std::collections::TryReserveError;
use std::fmt;

/// Errors produced while building or expanding argument vectors.
///
/// Malformed quoting and unreadable response files are never errors; they are
/// absorbed by the parser and the expander respectively.  Only allocation
/// failure and the two fatal `@file` conditions surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgvError {
    /// Growing an argument vector or an argument buffer failed.
    AllocationFailed,
    /// An `@file` argument names a directory.
    DirectoryResponseFile { path: String },
    /// More `@file` arguments were met than the iteration limit allows.
    TooManyResponseFiles,
}

impl ArgvError {
    /// Diagnostic text printed after `"<argv0>: error: "` for the fatal
    /// conditions, and the plain description for the rest.
    pub fn message(&self) -> &'static str {
        match self {
            ArgvError::AllocationFailed => "memory allocation failed",
            ArgvError::DirectoryResponseFile { .. } => "@-file refers to a directory",
            ArgvError::TooManyResponseFiles => "too many @-files encountered",
        }
    }

    /// Returns `true` for the conditions that terminate the process under
    /// [`crate::argv::expand_argv`].
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ArgvError::DirectoryResponseFile { .. } | ArgvError::TooManyResponseFiles
        )
    }
}

impl fmt::Display for ArgvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ArgvError {}

impl From<TryReserveError> for ArgvError {
    fn from(_: TryReserveError) -> Self {
        ArgvError::AllocationFailed
    }
}
