use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
/// The severity of a log message, syslog style.
/// Variants are ordered from the most severe (`Emergency`) to the least severe (`Debug`),
/// so the derived `Ord` sorts the most urgent messages first.
pub enum Level {
    /// The system is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions, a message that needs attention.
    Error = 3,
    /// Warning conditions, might or might not matter.
    Warning = 4,
    /// Normal but significant condition.
    Notice = 5,
    /// Informational message for record keeping purposes.
    Info = 6,
    /// Debug level message.
    #[default]
    Debug = 7,
}

impl Level {
    /// Every level, most severe first.
    pub const ALL: [Level; 8] = [
        Level::Emergency,
        Level::Alert,
        Level::Critical,
        Level::Error,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
    ];

    /// Returns the canonical name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "Emergency",
            Self::Alert => "Alert",
            Self::Critical => "Critical",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Notice => "Notice",
            Self::Info => "Info",
            Self::Debug => "Debug",
        }
    }

    /// Returns the numeric syslog value of the level, 0 through 7.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Returns the level for a numeric syslog value, if it is in range.
    pub fn from_ordinal(value: u64) -> Option<Self> {
        Self::ALL.get(usize::try_from(value).ok()?).copied()
    }

    /// Returns true if this level is strictly more severe than `other`.
    pub fn is_more_severe_than(&self, other: Level) -> bool {
        self.ordinal() < other.ordinal()
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::message::level::Level;

    #[test]
    fn test_severity_order() {
        assert!(Level::Emergency.is_more_severe_than(Level::Debug));
        assert!(!Level::Debug.is_more_severe_than(Level::Debug));
        assert!(Level::Error < Level::Warning);

        let mut levels = vec![Level::Info, Level::Alert, Level::Debug, Level::Error];
        levels.sort();
        assert_eq!(
            levels,
            vec![Level::Alert, Level::Error, Level::Info, Level::Debug]
        );
    }

    #[test]
    fn test_from_ordinal() {
        for level in Level::ALL {
            assert_eq!(Level::from_ordinal(level.ordinal() as u64), Some(level));
        }
        assert_eq!(Level::from_ordinal(8), None);
    }
}
