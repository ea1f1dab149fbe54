//! Destinations for monitor events.

use std::io::Write;

use chrono::{DateTime, Utc};

use super::MonitorEvent;
use crate::github::WorkflowError;
use crate::workspace::LineLog;

/// Receives monitor events as they happen.
pub trait MonitorSink: Send {
    /// Records one event.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Io`] when the event cannot be written.
    fn record(&mut self, event: &MonitorEvent) -> Result<(), WorkflowError>;
}

/// Formats a UTC instant as used in monitor log lines.
#[must_use]
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Writes every event to a log file and console-worthy events to a writer,
/// each prefixed with a UTC timestamp.
pub struct TimestampedLog<W> {
    log: LineLog,
    console: W,
}

impl<W: Write + Send> TimestampedLog<W> {
    /// Creates a sink writing to `log` and echoing alerts to `console`.
    #[must_use]
    pub const fn new(log: LineLog, console: W) -> Self {
        Self { log, console }
    }
}

impl<W: Write + Send> MonitorSink for TimestampedLog<W> {
    fn record(&mut self, event: &MonitorEvent) -> Result<(), WorkflowError> {
        let line = format!("[{}] {event}", timestamp(Utc::now()));
        if event.is_console() {
            writeln!(self.console, "{line}")
                .map_err(|error| WorkflowError::io("failed to write monitor output", &error))?;
        }
        self.log.append_line(&line)
    }
}
