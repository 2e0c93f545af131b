//! Example program that starts logging, emits messages from several threads, then stops and writes them out.
use crate::log_toggle::LogToggle;
use std::path::Path;
use std::process::exit;
use std::thread;
use tracing::{error, info, warn};
use ulog_common::logging::log_file::LogFile;
use ulog_common::logging::logger::Logger;
use ulog_common::logging::settings::LogSettings;
use ulog_common::message::source::Source;
use ulog_common::{
    ulog, ulog_alert, ulog_critical, ulog_debug, ulog_emergency, ulog_error, ulog_info,
    ulog_notice, ulog_warning,
};

mod log_toggle;

const LOG_FILE_PATH: &str = "./data/ulog.log";
const SETTINGS_FILE_PATH: &str = "./data/settings.json";
const WORKER_COUNT: i32 = 4;

fn main() {
    let _ = tracing_subscriber::fmt::try_init();

    let logger = Logger::shared();
    logger.set_enabled(false);

    let mut toggle = LogToggle::new();
    toggle.on_change(move |started| {
        if started {
            println!("Starting logs...");
        } else {
            println!("Stopping logs...");
        }
        logger.set_enabled(started);
    });

    toggle.toggle();

    let workers: Vec<_> = (0..WORKER_COUNT)
        .map(|worker| thread::spawn(move || emit_messages(worker)))
        .collect();

    for worker in workers {
        if worker.join().is_err() {
            error!("A logging worker panicked");
        }
    }

    toggle.toggle();

    if toggle.is_started() {
        error!("Logging is still started after the final toggle");
        exit(1);
    }

    // logged while stopped, so it is dropped
    ulog!("This message is never stored");

    let settings = load_settings(Path::new(SETTINGS_FILE_PATH));

    for message in logger.filtered_messages(&settings) {
        println!("{}", settings.render(&message));
    }

    let log_file = match LogFile::new(LOG_FILE_PATH.into()) {
        Ok(log_file) => log_file,
        Err(err) => {
            error!("Unable to create log file {}: {}", LOG_FILE_PATH, err);
            exit(1);
        }
    };

    match log_file.write_messages(&logger.messages_by_severity()) {
        Ok(bytes) => info!(
            "Wrote {} messages ({} bytes) to {}",
            logger.len(),
            bytes,
            LOG_FILE_PATH
        ),
        Err(err) => {
            error!("Unable to write log file {}: {}", LOG_FILE_PATH, err);
            exit(1);
        }
    }
}

#[tracing::instrument]
fn emit_messages(worker: i32) {
    let mut x = worker * 100;

    ulog!("Log from Rust worker: %i", x);
    x += 1;
    ulog_emergency!("Emergency from Rust worker: %i", x);
    x += 1;
    ulog_alert!("Alert from Rust worker: %i", x);
    x += 1;
    ulog_critical!("Critical from Rust worker: %i", x);
    x += 1;
    ulog_error!("Error from Rust worker: %i", x);
    x += 1;
    ulog_warning!("Warning from Rust worker: %i", x);
    x += 1;
    ulog_notice!("Notice from Rust worker: %i", x);
    x += 1;
    ulog_info!("Info from Rust worker: %i", x);
    x += 1;
    ulog_debug!("Debug from Rust worker: %i", x);

    let logger = Logger::shared();
    if let Err(err) = logger.warning(
        Source::CXX,
        "Forwarded from C++ worker %d: %s",
        &[worker.into(), "ok".into()],
    ) {
        warn!("Unable to format message: {}", err);
    }
}

/// Loads the display settings, writing the defaults out when no settings file exists yet.
fn load_settings(path: &Path) -> LogSettings {
    if !path.exists() {
        let settings = LogSettings::default();
        if let Some(parent) = path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!("Unable to create settings directory {}: {}", parent.display(), err);
            }
        }
        if let Err(err) = settings.save(path) {
            warn!("Unable to save default settings to {}: {}", path.display(), err);
        }
        return settings;
    }

    LogSettings::load(path).unwrap_or_else(|err| {
        warn!("Unable to load settings from {}, using defaults: {}", path.display(), err);
        LogSettings::default()
    })
}
