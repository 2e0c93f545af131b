use thiserror::Error;

/// Errors that can occur when loading or saving `LogSettings`.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    #[error("unable to access settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file does not contain valid settings.
    #[error("unable to parse settings: {0}")]
    Serialization(#[from] serde_json::Error),
}
