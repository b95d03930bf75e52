// cli/help.rs — Help text and exit helper.

use crate::cli::constants::display_level;
use crate::config::ITERATION_LIMIT;

/// Extra text shown by `--help` after the generated option list.
pub fn response_file_help() -> String {
    format!(
        "Response files:\n  \
         Any argument of the form @FILE is replaced by the arguments read from FILE\n  \
         before options are parsed.  FILE is split on whitespace; single or double\n  \
         quotes group words and a backslash escapes the next character.  Response\n  \
         files may reference other response files, up to {} expansions.\n  \
         A FILE that cannot be opened is passed through unchanged.",
        ITERATION_LIMIT
    )
}

/// Print `"<program>: error: <msg>"` to stderr (at display level 1) then exit
/// with code 1.
pub fn error_out(program: &str, msg: &str) -> ! {
    if display_level() >= 1 {
        eprintln!("{}: error: {}", program, msg);
    }
    std::process::exit(1);
}
