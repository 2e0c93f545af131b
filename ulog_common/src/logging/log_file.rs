use crate::message::Message;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::{fs, io};

/// A plain text sink, each message is appended as its description followed by a newline.
pub struct LogFile {
    log_path: Mutex<PathBuf>,
}

impl LogFile {
    /// Creates the sink, creating the parent directory of `log_path` if needed.
    /// The file itself is created on the first write.
    pub fn new(log_path: PathBuf) -> Result<LogFile, io::Error> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(Self {
            log_path: Mutex::new(log_path),
        })
    }

    pub fn get_path(&self) -> PathBuf {
        self.log_path
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn get_log_file(path: &Path) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(path)
    }

    /// Appends one message, returns the number of bytes written.
    pub fn write(&self, message: &Message) -> io::Result<usize> {
        self.write_messages(std::slice::from_ref(message))
    }

    /// Appends every message in order, returns the number of bytes written.
    pub fn write_messages(&self, messages: &[Message]) -> io::Result<usize> {
        let mut lines = String::new();
        for message in messages {
            lines.push_str(&message.get_description());
            lines.push('\n');
        }

        // held for the whole write so lines from concurrent callers do not interleave
        let path = self.log_path.lock().unwrap_or_else(PoisonError::into_inner);
        let mut log_file = LogFile::get_log_file(path.as_path())?;
        log_file.write_all(lines.as_bytes())?;
        Ok(lines.len())
    }
}
