//! Logging macros, every macro logs through `Logger::shared()` with `Source::Rust`.
//!
//! ```
//! use ulog_common::{ulog, ulog_error};
//!
//! ulog!("plain debug message %d", 1);
//! ulog_error!("failed to open %s", "config.json");
//! ```
use crate::format::format_arg::FormatArg;
use crate::logging::logger::Logger;
use crate::message::level::Level;
use crate::message::source::Source;
use tracing::warn;

#[doc(hidden)]
/// Logs to the shared logger, a format error is reported through `tracing` and the message is dropped.
pub fn log_to_shared(level: Level, fmt: &str, args: &[FormatArg]) {
    if let Err(err) = Logger::shared().log_with_format(Source::Rust, level, fmt, args) {
        warn!("Dropped log message with format {:?}: {}", fmt, err);
    }
}

#[macro_export]
#[doc(hidden)]
macro_rules! __ulog_with_level {
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::logging::macros::log_to_shared(
            $crate::message::level::Level::$level,
            $fmt,
            &[$($crate::format::format_arg::FormatArg::from($arg)),*],
        )
    };
}

/// Logs a debug message.
#[macro_export]
macro_rules! ulog {
    ($($args:tt)+) => { $crate::__ulog_with_level!(Debug, $($args)+) };
}

#[macro_export]
macro_rules! ulog_emergency {
    ($($args:tt)+) => { $crate::__ulog_with_level!(Emergency, $($args)+) };
}

#[macro_export]
macro_rules! ulog_alert {
    ($($args:tt)+) => { $crate::__ulog_with_level!(Alert, $($args)+) };
}

#[macro_export]
macro_rules! ulog_critical {
    ($($args:tt)+) => { $crate::__ulog_with_level!(Critical, $($args)+) };
}

#[macro_export]
macro_rules! ulog_error {
    ($($args:tt)+) => { $crate::__ulog_with_level!(Error, $($args)+) };
}

#[macro_export]
macro_rules! ulog_warning {
    ($($args:tt)+) => { $crate::__ulog_with_level!(Warning, $($args)+) };
}

#[macro_export]
macro_rules! ulog_notice {
    ($($args:tt)+) => { $crate::__ulog_with_level!(Notice, $($args)+) };
}

#[macro_export]
macro_rules! ulog_info {
    ($($args:tt)+) => { $crate::__ulog_with_level!(Info, $($args)+) };
}

#[macro_export]
macro_rules! ulog_debug {
    ($($args:tt)+) => { $crate::__ulog_with_level!(Debug, $($args)+) };
}
