use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
/// A single positional argument to a printf style format.
pub enum FormatArg {
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Char(char),
    /// Rendered as `true`/`false` by `%s`, and as 1/0 by the integer directives.
    Bool(bool),
}

impl FormatArg {
    /// Name of the variant, used when reporting a mismatch between a directive and its argument.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Char(_) => "char",
            Self::Bool(_) => "bool",
        }
    }
}

impl Display for FormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::UInt(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Str(value) => write!(f, "{}", value),
            Self::Char(value) => write!(f, "{}", value),
            Self::Bool(value) => write!(f, "{}", value),
        }
    }
}

macro_rules! impl_from_for_format_arg {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for FormatArg {
                fn from(value: $source) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_for_format_arg!(Int as i64: i8, i16, i32, i64, isize);
impl_from_for_format_arg!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_for_format_arg!(Float as f64: f32, f64);

impl From<char> for FormatArg {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<bool> for FormatArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}
