#![deny(missing_docs)]
//! Shared logging utilities for the builder workspace.
//!
//! Provides the `engine_*` macros used by the engine and app crates, a
//! per-thread progress tick counter for log context, and a terminal logger
//! initializer for tests.

use std::cell::Cell;

thread_local! {
    /// Number of progress ticks applied on this thread's message loop.
    static PROGRESS_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Records how many progress ticks the current thread has applied.
/// The app's message loop updates this after every dispatched tick.
pub fn set_progress_tick(tick: u64) {
    PROGRESS_TICK.with(|v| v.set(tick));
}

/// Returns the progress tick recorded for the current thread, or 0.
pub fn progress_tick() -> u64 {
    PROGRESS_TICK.with(|v| v.get())
}

/// Logs a trace-level message, prefixed with the current progress tick.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!("[tick {}] {}", $crate::progress_tick(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message, prefixed with the current progress tick.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!("[tick {}] {}", $crate::progress_tick(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message, prefixed with the current progress tick.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!("[tick {}] {}", $crate::progress_tick(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message, prefixed with the current progress tick.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!("[tick {}] {}", $crate::progress_tick(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message, prefixed with the current progress tick.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!("[tick {}] {}", $crate::progress_tick(), format_args!($($arg)*));
    }};
}

/// Initializes a terminal logger for integration tests.
///
/// Safe to call from every test; only the first call installs a logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // A logger installed by an earlier test makes this fail; that is fine.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
