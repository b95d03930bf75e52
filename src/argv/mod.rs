//! Argument vectors: building them from strings and expanding `@file`
//! response files into them.
//!
//! | Submodule    | Responsibility |
//! |--------------|---------------|
//! | [`tokenize`] | `build_argv`: split one string into arguments with quote/backslash handling. |
//! | [`vector`]   | `dup_argv` / `free_argv`: deep copy and release. |
//! | [`expand`]   | `expand_argv` / `try_expand_argv`: splice response-file contents into an argument vector. |
//! | [`error`]    | `ArgvError`. |

pub mod error;
pub mod tokenize;
pub mod vector;
pub mod expand;

pub use error::ArgvError;
pub use expand::{expand_argv, try_expand_argv, try_expand_argv_with_limit};
pub use tokenize::{build_argv, is_arg_space, only_whitespace};
pub use vector::{count_argv, dup_argv, free_argv};
