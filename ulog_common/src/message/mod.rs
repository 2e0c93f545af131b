//! Message sub module, contains the log message record and the pieces it is built from.
pub mod level;
pub mod log_time;
pub mod process_info;
pub mod source;

use crate::format::format_arg::FormatArg;
use crate::format::format_error::FormatError;
use crate::format::printf;
use crate::message::level::Level;
use crate::message::log_time::LogTime;
use crate::message::process_info::ProcessInfo;
use crate::message::source::Source;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Serialize, Deserialize, Debug, Clone, Hash, PartialEq, Eq)]
/// One log event. Every field is fixed when the message is created, equality and hashing cover all of them.
pub struct Message {
    source: Source,
    level: Level,
    time: LogTime,
    process: ProcessInfo,
    text: String,
}

impl Message {
    /// Creates a message from a literal text, capturing the current time, process and thread.
    pub fn new(source: Source, level: Level, text: &str) -> Self {
        Self::with_time(source, level, text, LogTime::now())
    }

    /// Creates a message whose text is `fmt` with the printf style directives replaced by `args`.
    /// Returns an error if the arguments do not satisfy the directives of `fmt`.
    pub fn with_format(
        source: Source,
        level: Level,
        fmt: &str,
        args: &[FormatArg],
    ) -> Result<Self, FormatError> {
        let text = printf::format(fmt, args)?;
        Ok(Self::with_time(source, level, &text, LogTime::now()))
    }

    /// Creates a message stamped with the given time instead of the current one.
    /// The process and thread identity are still those of the caller.
    pub fn with_time(source: Source, level: Level, text: &str, time: LogTime) -> Self {
        Self::from_parts(source, level, text, time, ProcessInfo::current())
    }

    /// Creates a message from already known parts, used when importing records emitted elsewhere.
    pub fn from_parts(
        source: Source,
        level: Level,
        text: &str,
        time: LogTime,
        process: ProcessInfo,
    ) -> Self {
        Self {
            source,
            level,
            time,
            process,
            text: text.to_string(),
        }
    }

    pub fn get_source(&self) -> Source {
        self.source
    }

    pub fn get_level(&self) -> Level {
        self.level
    }

    /// Returns the seconds since the unix epoch at which the message was created.
    pub fn get_time(&self) -> u64 {
        self.time.get_seconds()
    }

    /// Returns the millisecond component (0 through 999) of the creation time.
    pub fn get_milliseconds(&self) -> u64 {
        self.time.get_milliseconds()
    }

    pub fn get_log_time(&self) -> LogTime {
        self.time
    }

    pub fn get_process_id(&self) -> u64 {
        self.process.get_process_id()
    }

    pub fn get_thread_id(&self) -> u64 {
        self.process.get_thread_id()
    }

    pub fn get_message(&self) -> &str {
        &self.text
    }

    pub fn get_source_string(&self) -> String {
        self.source.to_string()
    }

    pub fn get_level_string(&self) -> String {
        self.level.to_string()
    }

    /// Returns the creation time in local time as `YYYY-MM-DD HH:MM:SS.mmm`.
    pub fn get_time_string(&self) -> String {
        self.time.to_string()
    }

    /// Returns the process and thread id as `pid:tid`.
    pub fn get_process_string(&self) -> String {
        self.process.to_string()
    }

    /// Returns the single line rendering of the message:
    ///
    /// `[ pid:tid ]> [ YYYY-MM-DD HH:MM:SS.mmm ]> [ source ]> [ level ]> text`
    ///
    /// Text based sinks write exactly this line, so the field order and separators must stay stable.
    pub fn get_description(&self) -> String {
        self.to_string()
    }
}

impl Default for Message {
    /// A debug message with no text, emitted from `Source::Rust`.
    fn default() -> Self {
        Self::new(Source::default(), Level::default(), "")
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[ {} ]> [ {} ]> [ {} ]> [ {} ]> {}",
            self.process, self.time, self.source, self.level, self.text
        )
    }
}

/// Builds a `Result<Message, FormatError>` from a source, a level, a printf style format and its arguments.
///
/// ```
/// use ulog_common::message;
/// use ulog_common::message::level::Level;
/// use ulog_common::message::source::Source;
///
/// let msg = message!(Source::C, Level::Error, "value=%d", 42).unwrap();
/// assert_eq!(msg.get_message(), "value=42");
/// ```
#[macro_export]
macro_rules! message {
    ($source:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::message::Message::with_format(
            $source,
            $level,
            $fmt,
            &[$($crate::format::format_arg::FormatArg::from($arg)),*],
        )
    };
}
