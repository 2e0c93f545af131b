//! Import of Apple System Log style records.
//!
//! A record is a flat key/value map. Only the keys below are read, everything else is ignored.
use crate::message::level::Level;
use crate::message::log_time::LogTime;
use crate::message::process_info::ProcessInfo;
use crate::message::source::Source;
use crate::message::Message;
use std::collections::HashMap;

pub const KEY_MESSAGE: &str = "Message";
pub const KEY_LEVEL: &str = "Level";
pub const KEY_PID: &str = "PID";
pub const KEY_TIME: &str = "Time";
pub const KEY_TIME_NANOSECONDS: &str = "TimeNanoSec";

/// Builds a message with source `ASL` from a system log record.
/// Missing or unparsable fields take their zero value, a level outside 0 through 7 is treated as `Debug`.
/// The thread of an imported record is unknown and reported as 0.
pub fn message_from_record(record: &HashMap<String, String>) -> Message {
    let number = |key: &str| -> Option<u64> { record.get(key)?.trim().parse().ok() };

    let text = record.get(KEY_MESSAGE).map(String::as_str).unwrap_or("");

    let level = number(KEY_LEVEL)
        .and_then(Level::from_ordinal)
        .unwrap_or(Level::Debug);

    let time = LogTime::from_parts(
        number(KEY_TIME).unwrap_or(0),
        number(KEY_TIME_NANOSECONDS).unwrap_or(0) / 1_000_000,
    );

    let process = ProcessInfo::new(number(KEY_PID).unwrap_or(0), 0);

    Message::from_parts(Source::ASL, level, text, time, process)
}
