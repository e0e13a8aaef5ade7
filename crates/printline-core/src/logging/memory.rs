//! In-memory logger

use parking_lot::Mutex;

use super::level::LogLevel;
use super::traits::{Logger, EXCEPTION_UNSUPPORTED};

/// One captured logger call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub text: String,
    pub stack: Option<String>,
}

/// Logger that records every call, for tests and hosts that inspect output
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLogger {
    /// Create a new empty memory logger
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Just the texts, oldest first
    pub fn texts(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Clear all records
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, text: &str, stack: Option<&str>, level: LogLevel) {
        let record = match level {
            LogLevel::Exception => LogRecord {
                level,
                text: EXCEPTION_UNSUPPORTED.to_string(),
                stack: None,
            },
            _ => LogRecord {
                level,
                text: text.to_string(),
                stack: stack.filter(|s| !s.is_empty()).map(str::to_string),
            },
        };
        self.records.lock().push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_records() {
        let logger = MemoryLogger::new();
        assert!(logger.is_empty());

        logger.log("first", None, LogLevel::Log);
        logger.log("second", Some("stk"), LogLevel::Error);
        logger.log("third", Some(""), LogLevel::Warning);

        let records = logger.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].stack.as_deref(), Some("stk"));
        assert_eq!(records[2].stack, None);
        assert_eq!(logger.texts(), vec!["first", "second", "third"]);

        logger.clear();
        assert_eq!(logger.len(), 0);
    }

    #[test]
    fn test_memory_logger_exception() {
        let logger = MemoryLogger::new();
        logger.log("original", Some("stk"), LogLevel::Exception);

        let records = logger.records();
        assert_eq!(records[0].text, EXCEPTION_UNSUPPORTED);
        assert_eq!(records[0].level, LogLevel::Exception);
        assert_eq!(records[0].stack, None);
    }
}
