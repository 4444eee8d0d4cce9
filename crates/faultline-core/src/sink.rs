use std::sync::Mutex;

use tracing::Level;

/// Write-only destination for handler log output
///
/// Emission is fire-and-forget: implementations must tolerate concurrent
/// calls and must not surface failures to the caller.
pub trait LogSink: Send + Sync {
    /// Record one event at `level`, with the original error text when
    /// one is available
    fn log(&self, level: Level, message: &str, error: Option<&str>);
}

/// Sink that forwards to the `tracing` subscriber installed by the host
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: Level, message: &str, error: Option<&str>) {
        // Event macros need a const level, so dispatch per level here
        if level == Level::ERROR {
            match error {
                Some(error) => tracing::error!(error = %error, "{message}"),
                None => tracing::error!("{message}"),
            }
        } else if level == Level::WARN {
            match error {
                Some(error) => tracing::warn!(error = %error, "{message}"),
                None => tracing::warn!("{message}"),
            }
        } else if level == Level::INFO {
            match error {
                Some(error) => tracing::info!(error = %error, "{message}"),
                None => tracing::info!("{message}"),
            }
        } else if level == Level::DEBUG {
            match error {
                Some(error) => tracing::debug!(error = %error, "{message}"),
                None => tracing::debug!("{message}"),
            }
        } else {
            match error {
                Some(error) => tracing::trace!(error = %error, "{message}"),
                None => tracing::trace!("{message}"),
            }
        }
    }
}

/// One event captured by [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Level the event was emitted at
    pub level: Level,
    /// Event message
    pub message: String,
    /// Original error text attached to the event
    pub error: Option<String>,
}

/// Sink that captures events in memory for inspection in tests
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Events captured so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl LogSink for MemorySink {
    fn log(&self, level: Level, message: &str, error: Option<&str>) {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.push(LogRecord {
            level,
            message: message.to_owned(),
            error: error.map(str::to_owned),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_captures_level_message_and_error() {
        let sink = MemorySink::new();
        sink.log(Level::WARN, "Error generating JSON", Some("key must be a string"));

        assert_eq!(
            sink.records(),
            vec![LogRecord {
                level: Level::WARN,
                message: "Error generating JSON".to_owned(),
                error: Some("key must be a string".to_owned()),
            }]
        );
    }

    #[test]
    fn memory_sink_preserves_emission_order() {
        let sink = MemorySink::new();
        sink.log(Level::DEBUG, "first", None);
        sink.log(Level::ERROR, "second", None);

        let levels: Vec<Level> = sink.records().into_iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![Level::DEBUG, Level::ERROR]);
    }

    #[test]
    fn tracing_sink_accepts_every_level() {
        // No subscriber installed; emission is a no-op but must not panic
        for level in [Level::TRACE, Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR] {
            TracingSink.log(level, "event", Some("detail"));
            TracingSink.log(level, "event", None);
        }
    }
}
