//! Verbosity-gated trace output for the simulation engine.
//!
//! Every policy takes a `verbosity: u8` from its caller and passes it to the
//! macros below. The format arguments are only evaluated once the level is
//! reached, so a silent run costs one integer comparison per call site. Lines
//! go to stderr prefixed with the level tag, e.g. `[changes] t=4: dispatch P2`.
//!
//! | level | macro          | what a policy reports                          |
//! |-------|----------------|------------------------------------------------|
//! | 0     | none           | nothing                                        |
//! | 1     | `log_changes!` | dispatch, preemption, completion, idle jumps   |
//! | 2     | `log_checks!`  | which ready process won selection and why      |
//! | 3     | `log_debug!`   | ready-queue contents on every Round Robin turn |

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Tag printed in front of a line emitted at `level`.
pub fn level_tag(level: u8) -> &'static str {
    match level {
        VERBOSITY_SILENT => "silent",
        VERBOSITY_CHANGES => "changes",
        VERBOSITY_CHECKS => "checks",
        _ => "debug",
    }
}

/// Emit a line on stderr when `verbosity` reaches `level`.
#[macro_export]
macro_rules! log_at {
    ($level:expr, $verbosity:expr, $($arg:tt)*) => {{
        let level: u8 = $level;
        if $verbosity >= level {
            eprintln!("[{}] {}", $crate::logging::level_tag(level), format_args!($($arg)*));
        }
    }};
}

/// Scheduling decisions that change who holds the CPU.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_CHANGES, $verbosity, $($arg)*)
    };
}

/// Candidate selection details.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_CHECKS, $verbosity, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_DEBUG, $verbosity, $($arg)*)
    };
}
