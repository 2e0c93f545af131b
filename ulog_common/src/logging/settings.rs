use crate::logging::settings_error::SettingsError;
use crate::message::level::Level;
use crate::message::source::Source;
use crate::message::Message;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
/// Display filters for log messages.
/// The `show_<source>` and `show_<level>` flags decide which messages are displayed at all,
/// the column flags decide which parts of a displayed message are rendered.
pub struct LogSettings {
    pub show_c: bool,
    pub show_cxx: bool,
    pub show_objc: bool,
    pub show_objcxx: bool,
    pub show_asl: bool,
    pub show_rust: bool,

    pub show_emergency: bool,
    pub show_alert: bool,
    pub show_critical: bool,
    pub show_error: bool,
    pub show_warning: bool,
    pub show_notice: bool,
    pub show_info: bool,
    pub show_debug: bool,

    pub show_process: bool,
    pub show_time: bool,
    pub show_source: bool,
    pub show_level: bool,
}

impl Default for LogSettings {
    /// Shows every message with every column.
    fn default() -> Self {
        Self {
            show_c: true,
            show_cxx: true,
            show_objc: true,
            show_objcxx: true,
            show_asl: true,
            show_rust: true,
            show_emergency: true,
            show_alert: true,
            show_critical: true,
            show_error: true,
            show_warning: true,
            show_notice: true,
            show_info: true,
            show_debug: true,
            show_process: true,
            show_time: true,
            show_source: true,
            show_level: true,
        }
    }
}

impl LogSettings {
    pub fn restore_defaults(&mut self) {
        *self = Self::default();
    }

    pub fn shows_source(&self, source: Source) -> bool {
        match source {
            Source::C => self.show_c,
            Source::CXX => self.show_cxx,
            Source::OBJC => self.show_objc,
            Source::OBJCXX => self.show_objcxx,
            Source::ASL => self.show_asl,
            Source::Rust => self.show_rust,
        }
    }

    pub fn shows_level(&self, level: Level) -> bool {
        match level {
            Level::Emergency => self.show_emergency,
            Level::Alert => self.show_alert,
            Level::Critical => self.show_critical,
            Level::Error => self.show_error,
            Level::Warning => self.show_warning,
            Level::Notice => self.show_notice,
            Level::Info => self.show_info,
            Level::Debug => self.show_debug,
        }
    }

    /// Returns true if both the source and the level of the message are shown.
    pub fn shows(&self, message: &Message) -> bool {
        self.shows_source(message.get_source()) && self.shows_level(message.get_level())
    }

    /// Renders the message like `Message::get_description`, leaving out hidden columns.
    /// With every column shown the result is exactly the description.
    pub fn render(&self, message: &Message) -> String {
        let columns = [
            (self.show_process, message.get_process_string()),
            (self.show_time, message.get_time_string()),
            (self.show_source, message.get_source_string()),
            (self.show_level, message.get_level_string()),
        ];

        let mut line = String::new();
        for (shown, column) in columns {
            if shown {
                line.push_str("[ ");
                line.push_str(&column);
                line.push_str(" ]> ");
            }
        }
        line.push_str(message.get_message());
        line
    }

    /// Reads settings from a JSON file, fields missing from the file keep their default.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        debug!("Loaded log settings from {}", path.display());
        Ok(settings)
    }

    /// Writes the settings to a JSON file, replacing it if it exists.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        debug!("Saved log settings to {}", path.display());
        Ok(())
    }
}
