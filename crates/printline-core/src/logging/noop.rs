//! No-op logger implementation

use super::level::LogLevel;
use super::traits::Logger;

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn log(&self, _text: &str, _stack: Option<&str>, _level: LogLevel) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_logger() {
        let logger = NoOpLogger::new();

        // These should all do nothing without panicking
        logger.log("log message", None, LogLevel::Log);
        logger.log("warning message", None, LogLevel::Warning);
        logger.log("error message", Some("stack"), LogLevel::Error);
        logger.log("exception message", None, LogLevel::Exception);
    }
}
