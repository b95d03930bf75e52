// respargs — shell-like argument splitting and @file response-file expansion

pub mod config;
pub mod util;
pub mod argv;
pub mod cli;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use argv::{build_argv, dup_argv, expand_argv, free_argv, try_expand_argv, ArgvError};
