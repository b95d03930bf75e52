// Integration tests for cli/constants.rs — display level plumbing

use respargs::cli::constants::{
    display_level, display_level_from_flags, set_display_level, PROGRAM_NAME,
};

#[test]
fn program_name_is_binary_name() {
    assert_eq!(PROGRAM_NAME, "respargs");
}

#[test]
fn display_level_setter_round_trips() {
    let prev = display_level();
    set_display_level(0);
    assert_eq!(display_level(), 0);
    set_display_level(prev);
}

#[test]
fn quiet_and_verbose_cancel() {
    assert_eq!(display_level_from_flags(1, 1), 2);
}
