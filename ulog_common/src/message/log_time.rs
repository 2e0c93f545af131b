use chrono::{Local, LocalResult, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Layout of the date part of a rendered time, the milliseconds are appended after a `.`
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
/// Wall clock time attached to a log message, split into whole seconds since the unix epoch
/// and the millisecond component of the current second.
pub struct LogTime {
    seconds: u64,
    milliseconds: u64,
}

impl LogTime {
    /// Captures the current wall clock time.
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            seconds: u64::try_from(now.timestamp()).unwrap_or(0),
            milliseconds: u64::from(now.timestamp_subsec_millis()).min(999),
        }
    }

    /// Creates a time from its parts, milliseconds past 999 are clamped to 999.
    pub fn from_parts(seconds: u64, milliseconds: u64) -> Self {
        Self {
            seconds,
            milliseconds: milliseconds.min(999),
        }
    }

    pub fn get_seconds(&self) -> u64 {
        self.seconds
    }

    pub fn get_milliseconds(&self) -> u64 {
        self.milliseconds
    }
}

impl Display for LogTime {
    /// Renders the time in the local timezone as `YYYY-MM-DD HH:MM:SS.mmm`.
    /// Times chrono cannot represent fall back to `<seconds>.mmm`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let local = match i64::try_from(self.seconds) {
            Ok(seconds) => match Local.timestamp_opt(seconds, 0) {
                LocalResult::Single(date) => Some(date),
                LocalResult::Ambiguous(earliest, _) => Some(earliest),
                LocalResult::None => None,
            },
            Err(_) => None,
        };

        match local {
            Some(date) => write!(
                f,
                "{}.{:03}",
                date.format(DATE_FORMAT),
                self.milliseconds
            ),
            None => write!(f, "{}.{:03}", self.seconds, self.milliseconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::message::log_time::LogTime;

    #[test]
    fn test_clamp_milliseconds() {
        let time = LogTime::from_parts(10, 4000);
        assert_eq!(time.get_seconds(), 10);
        assert_eq!(time.get_milliseconds(), 999);
    }

    #[test]
    fn test_now_is_after_epoch() {
        let time = LogTime::now();
        assert!(time.get_seconds() > 1_600_000_000);
        assert!(time.get_milliseconds() < 1000);
    }

    #[test]
    fn test_display_layout() {
        let rendered = LogTime::from_parts(1_700_000_000, 7).to_string();
        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(rendered.len(), 23);
        assert!(rendered.ends_with(".007"));
        assert_eq!(&rendered[4..5], "-");
        assert_eq!(&rendered[10..11], " ");
        assert_eq!(&rendered[19..20], ".");
    }

    #[test]
    fn test_display_out_of_range() {
        let rendered = LogTime::from_parts(u64::MAX, 12).to_string();
        assert_eq!(rendered, format!("{}.012", u64::MAX));
    }
}
