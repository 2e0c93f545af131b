//! A structured log message model and the small logging engine around it.
//!
//! A [`message::Message`] records one log event: the language it came from, its severity,
//! the time it was created, the emitting process and thread, and its text.
//! The [`logging::logger::Logger`] collects messages from every thread of the process.
pub mod asl;
pub mod format;
pub mod logging;
pub mod message;
