use thiserror::Error;

/// Errors that can occur when a printf style format is applied to its arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A directive had no argument left to consume.
    #[error("directive %{directive} at argument {index} has no matching argument")]
    MissingArgument { index: usize, directive: char },

    /// An argument cannot be rendered by the directive that consumes it.
    #[error("directive %{directive} cannot render argument {index} of type {found}")]
    TypeMismatch {
        index: usize,
        directive: char,
        found: &'static str,
    },

    /// More arguments were given than the format has directives for.
    #[error("format consumes {expected} arguments but {found} were given")]
    UnusedArguments { expected: usize, found: usize },

    /// The format contains a conversion this formatter does not understand.
    #[error("unsupported directive '{directive}' in directive starting at byte {offset}")]
    InvalidDirective { offset: usize, directive: char },

    /// The format ends in the middle of a directive.
    #[error("format ends with an incomplete directive")]
    TrailingPercent,
}
