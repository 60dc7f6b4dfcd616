//! Standardized logging utility.
//!
//! This module provides the `wlog!` macro which prints
//! `YYYY-MM-DD HH:MM:SS [MODULE] Message` lines to stderr, matching the
//! timestamp format of the tracing subscriber configured in main.

#[macro_export]
macro_rules! wlog {
    ($module:expr, $($arg:tt)*) => {{
        let now = chrono::Local::now();
        eprintln!("{} [{}] {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            $module,
            format!($($arg)*)
        );
    }};
}

/// Standardized module identifiers
pub const MAIN: &str = "MAIN";
pub const SESSION: &str = "SESSION";
pub const TREE: &str = "TREE";
