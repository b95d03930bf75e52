// cli/constants.rs — Program identity and display infrastructure.
//
// The display level is process-wide so the library's expander can log through
// the same `displaylevel!` macro as the binary.

use std::sync::atomic::{AtomicU32, Ordering};

// ── String / identity constants ───────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "respargs";

/// Separator written after each printed argument in `--null` mode.
pub const NUL_TERMINATOR: u8 = b'\0';
/// Separator written after each printed argument by default.
pub const LINE_TERMINATOR: u8 = b'\n';

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal (downgradable); 3 = non-downgradable; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Applies `-v` / `-q` counts to the default level of 2, saturating at 0.
pub fn display_level_from_flags(verbose: u8, quiet: u8) -> u32 {
    (2 + u32::from(verbose)).saturating_sub(u32::from(quiet))
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr when the display level is at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
