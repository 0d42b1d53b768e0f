//! Observability subsystem
//!
//! Structured JSON logging with typed events. Loggers are plain values passed
//! to whoever needs them; there is no global logger.
//!
//! # Usage
//!
//! ```ignore
//! use sample_backend::observability::{Event, Logger, Severity};
//!
//! let logger = Logger::console(Severity::Info);
//! logger.log_event(Event::Count, &[]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{ConsoleSink, LogSink, Logger, MemorySink, Severity};

impl Logger {
    /// Log a typed event, FATAL for fatal events and INFO otherwise
    pub fn log_event(&self, event: Event, fields: &[(&str, &str)]) {
        let severity = if event.is_fatal() {
            Severity::Fatal
        } else {
            Severity::Info
        };
        self.log(severity, event.as_str(), fields);
    }
}
