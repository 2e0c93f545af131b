//! Logging sub module, contains the shared logger, its display settings, the file sink and the logging macros.
pub mod log_file;
pub mod logger;
pub mod macros;
pub mod settings;
pub mod settings_error;
