//! Logger module
//!
//! Logging is an injected capability rather than a global: the dispatcher
//! takes a [`Logger`] so tests can assert on log content without capturing
//! process output streams.

mod format;

pub use format::AccessLogEntry;

use std::sync::Mutex;

/// Logging capability used throughout the server
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Production logger writing to stdout/stderr
#[derive(Debug, Default)]
pub struct StdLogger;

impl Logger for StdLogger {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("[WARN] {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("[ERROR] {message}");
    }
}

/// Log severity recorded by [`MemoryLogger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Capturing logger used by the test suites
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries
    #[must_use]
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Whether any entry at `level` contains `needle`
    #[must_use]
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.entries()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    fn record(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_records_levels() {
        let logger = MemoryLogger::new();
        logger.info("started");
        logger.warn("odd path");
        logger.error("read failed");

        assert_eq!(logger.entries().len(), 3);
        assert!(logger.contains(Level::Info, "started"));
        assert!(logger.contains(Level::Warn, "odd"));
        assert!(logger.contains(Level::Error, "read failed"));
        assert!(!logger.contains(Level::Info, "read failed"));
    }
}
