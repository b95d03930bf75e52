// config.rs — Compile-time configuration constants for argument building and
// response-file expansion.
//
// None of these values are read from the environment: the expander carries
// no persisted state and no environment variables belong to it.

// Number of `@file` expansions allowed within one top-level expansion call.
// The counter is pre-decremented, so at most ITERATION_LIMIT - 1 response
// files are processed and the ITERATION_LIMIT-th `@` token is fatal.
pub const ITERATION_LIMIT: u32 = 2000;

// Initial capacity of a freshly built argument vector (arguments, not bytes).
// The vector grows by doubling past this point.
pub const INITIAL_MAXARGC: usize = 8;

// Leading character that marks an argument as a response-file reference.
pub const RESPONSE_FILE_PREFIX: char = '@';
