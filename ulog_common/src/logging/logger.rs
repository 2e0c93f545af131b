use crate::format::format_arg::FormatArg;
use crate::format::format_error::FormatError;
use crate::logging::settings::LogSettings;
use crate::message::level::Level;
use crate::message::source::Source;
use crate::message::Message;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error, info, warn};

static SHARED_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Collects log messages emitted from any thread of the process.
/// A disabled logger drops every message it is given.
pub struct Logger {
    enabled: AtomicBool,
    messages: RwLock<Vec<Message>>,
}

impl Logger {
    /// Returns the process wide logger, created on first use.
    pub fn shared() -> &'static Logger {
        SHARED_LOGGER.get_or_init(Logger::new)
    }

    /// Creates a new, enabled, empty logger.
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            messages: RwLock::new(Vec::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn set_enabled(&self, value: bool) {
        self.enabled.store(value, Ordering::Release);
    }

    /// Stores the message and forwards it to `tracing`, returns false if the logger is disabled.
    pub fn log(&self, message: Message) -> bool {
        if !self.is_enabled() {
            return false;
        }

        trace_message(&message);
        self.write_messages().push(message);
        true
    }

    /// Formats and logs a message. Formatting errors are returned even when the logger is disabled.
    pub fn log_with_format(
        &self,
        source: Source,
        level: Level,
        fmt: &str,
        args: &[FormatArg],
    ) -> Result<(), FormatError> {
        let message = Message::with_format(source, level, fmt, args)?;
        self.log(message);
        Ok(())
    }

    pub fn emergency(&self, source: Source, fmt: &str, args: &[FormatArg]) -> Result<(), FormatError> {
        self.log_with_format(source, Level::Emergency, fmt, args)
    }

    pub fn alert(&self, source: Source, fmt: &str, args: &[FormatArg]) -> Result<(), FormatError> {
        self.log_with_format(source, Level::Alert, fmt, args)
    }

    pub fn critical(&self, source: Source, fmt: &str, args: &[FormatArg]) -> Result<(), FormatError> {
        self.log_with_format(source, Level::Critical, fmt, args)
    }

    pub fn error(&self, source: Source, fmt: &str, args: &[FormatArg]) -> Result<(), FormatError> {
        self.log_with_format(source, Level::Error, fmt, args)
    }

    pub fn warning(&self, source: Source, fmt: &str, args: &[FormatArg]) -> Result<(), FormatError> {
        self.log_with_format(source, Level::Warning, fmt, args)
    }

    pub fn notice(&self, source: Source, fmt: &str, args: &[FormatArg]) -> Result<(), FormatError> {
        self.log_with_format(source, Level::Notice, fmt, args)
    }

    pub fn info(&self, source: Source, fmt: &str, args: &[FormatArg]) -> Result<(), FormatError> {
        self.log_with_format(source, Level::Info, fmt, args)
    }

    pub fn debug(&self, source: Source, fmt: &str, args: &[FormatArg]) -> Result<(), FormatError> {
        self.log_with_format(source, Level::Debug, fmt, args)
    }

    /// Returns a copy of every stored message, in the order they were logged.
    pub fn messages(&self) -> Vec<Message> {
        self.read_messages().clone()
    }

    /// Returns the stored messages ordered by severity, most severe first, then by time.
    pub fn messages_by_severity(&self) -> Vec<Message> {
        let mut messages = self.messages();
        messages.sort_by_key(|message| (message.get_level(), message.get_log_time()));
        messages
    }

    /// Returns the stored messages the given settings allow to be displayed.
    pub fn filtered_messages(&self, settings: &LogSettings) -> Vec<Message> {
        self.read_messages()
            .iter()
            .filter(|message| settings.shows(message))
            .cloned()
            .collect()
    }

    /// Removes every stored message.
    pub fn clear(&self) {
        self.write_messages().clear();
    }

    pub fn len(&self) -> usize {
        self.read_messages().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_messages().is_empty()
    }

    // messages are only ever pushed or cleared, so a poisoned lock still holds a valid list
    fn read_messages(&self) -> RwLockReadGuard<'_, Vec<Message>> {
        self.messages.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_messages(&self) -> RwLockWriteGuard<'_, Vec<Message>> {
        self.messages.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn trace_message(message: &Message) {
    match message.get_level() {
        Level::Emergency | Level::Alert | Level::Critical | Level::Error => {
            error!("{}", message)
        }
        Level::Warning => warn!("{}", message),
        Level::Notice | Level::Info => info!("{}", message),
        Level::Debug => debug!("{}", message),
    }
}
