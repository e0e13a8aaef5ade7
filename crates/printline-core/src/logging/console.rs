//! Console logger implementation

use std::sync::Arc;

use super::level::LogLevel;
use super::traits::{render, Logger, EXCEPTION_UNSUPPORTED};
use crate::system_log::SystemLog;

/// A logger that writes timestamped lines through a [`SystemLog`]
///
/// Every level lands on the same sink; the level only decides whether the
/// text is written or replaced by the exception notice.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    system: Arc<SystemLog>,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger on standard output
    pub fn new() -> Self {
        Self {
            system: Arc::new(SystemLog::stdout()),
        }
    }

    /// Create a console logger sharing an existing system log
    pub fn with_system_log(system: Arc<SystemLog>) -> Self {
        Self { system }
    }

    pub fn system_log(&self) -> &Arc<SystemLog> {
        &self.system
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, text: &str, stack: Option<&str>, level: LogLevel) {
        match level {
            LogLevel::Log | LogLevel::Warning | LogLevel::Error => {
                self.system.write(&render(text, stack));
            }
            LogLevel::Exception => self.system.write(EXCEPTION_UNSUPPORTED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process_clock::ProcessClock;
    use crate::sink::MemorySink;

    fn memory_logger() -> (ConsoleLogger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let system = SystemLog::new(sink.clone(), ProcessClock::process());
        (ConsoleLogger::with_system_log(Arc::new(system)), sink)
    }

    fn message(line: &str) -> &str {
        // Strip "[HH:MM:SS][HH:MM:SS] " and the trailing newline
        line[21..].trim_end_matches('\n')
    }

    #[test]
    fn test_console_logger_levels() {
        let (logger, sink) = memory_logger();

        logger.log("plain", None, LogLevel::Log);
        logger.log("careful", Some(" @stack"), LogLevel::Warning);
        logger.log("broken", Some(" @stack"), LogLevel::Error);

        let lines = sink.lines();
        assert_eq!(message(&lines[0]), "plain");
        assert_eq!(message(&lines[1]), "careful @stack");
        assert_eq!(message(&lines[2]), "broken @stack");
    }

    #[test]
    fn test_console_logger_exception_text() {
        let (logger, sink) = memory_logger();

        logger.log("secret details", Some("stack"), LogLevel::Exception);

        let lines = sink.lines();
        assert_eq!(message(&lines[0]), EXCEPTION_UNSUPPORTED);
        assert!(!lines[0].contains("secret details"));
    }

    #[test]
    fn test_console_logger_stdout() {
        // This test just verifies the logger doesn't panic
        let logger = ConsoleLogger::new();
        logger.log("log message", None, LogLevel::Log);
        logger.log("error message", Some(" stack"), LogLevel::Error);
    }
}
