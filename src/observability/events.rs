//! Observable events
//!
//! Events are explicit and typed; the log line carries `as_str()`.

use std::fmt;

/// Observable events in the sample backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Listener bound, ready to serve
    ServerListening,
    /// Server stopped with an error
    ServerFailed,

    // Item operations
    /// Insert of a numeric item requested
    InsertNumber,
    /// Insert of a text item requested
    InsertText,
    /// Delete of an item requested
    Delete,
    /// Lookup of a numeric item requested
    ReferNumber,
    /// Lookup of a text item requested
    ReferText,
    /// Item count requested
    Count,

    // System endpoints
    /// Liveness probe
    Pingpong,
    /// Version requested
    Version,
    /// Health requested
    Health,

    // Boundary
    /// Request body rejected before reaching the handler
    RequestRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerFailed => "SERVER_FAILED",

            Event::InsertNumber => "ITEM_INSERT_NUMBER",
            Event::InsertText => "ITEM_INSERT_TEXT",
            Event::Delete => "ITEM_DELETE",
            Event::ReferNumber => "ITEM_REFER_NUMBER",
            Event::ReferText => "ITEM_REFER_TEXT",
            Event::Count => "ITEM_COUNT",

            Event::Pingpong => "PINGPONG",
            Event::Version => "VERSION",
            Event::Health => "HEALTH",

            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Returns true if this event indicates the process is going down
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
