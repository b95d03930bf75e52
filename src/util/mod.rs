//! Filesystem helpers used by the response-file expander.
//!
//! - [`file_status`] — `is_directory`

pub mod file_status;

pub use file_status::is_directory;
