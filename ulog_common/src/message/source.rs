use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
/// The language or subsystem a log message was emitted from.
#[allow(clippy::upper_case_acronyms)]
pub enum Source {
    C,
    CXX,
    OBJC,
    OBJCXX,
    /// Apple System Log, messages imported from the system log rather than emitted by a program.
    ASL,
    /// This crate's own language tag, used when no other source is given.
    #[default]
    Rust,
}

impl Source {
    /// Every source, in declaration order.
    pub const ALL: [Source; 6] = [
        Source::C,
        Source::CXX,
        Source::OBJC,
        Source::OBJCXX,
        Source::ASL,
        Source::Rust,
    ];

    /// Returns the canonical name of the source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CXX => "CXX",
            Self::OBJC => "OBJC",
            Self::OBJCXX => "OBJCXX",
            Self::ASL => "ASL",
            Self::Rust => "Rust",
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
