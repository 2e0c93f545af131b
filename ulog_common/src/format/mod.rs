//! Format sub module, contains the printf style formatter used to build message text from a format and its arguments.
pub mod format_arg;
pub mod format_error;
pub mod printf;
