//! Logger trait definition

use std::borrow::Cow;
use std::error::Error;
use std::sync::Arc;

use super::level::LogLevel;
use crate::concat::concat2;

/// Text logged in place of an exception passed through the text interface
pub const EXCEPTION_UNSUPPORTED: &str = "Log of exceptions not supported";

/// Logger abstraction the console facade delegates to
///
/// Implementations:
/// - `ConsoleLogger`: timestamped lines on stdout (default)
/// - `NoOpLogger`: silent
/// - `MemoryLogger`: keeps records for inspection
/// - Python adapter: forwards to the `logging` module of the host interpreter
pub trait Logger: Send + Sync {
    /// Log `text` at `level`, with optional stack information
    ///
    /// Must not panic; sink failures are swallowed.
    fn log(&self, text: &str, stack: Option<&str>, level: LogLevel);

    /// Log a native error object
    ///
    /// Only host integrations can do anything useful with this; the default
    /// drops it.
    fn log_exception(&self, _error: &(dyn Error + 'static)) {}
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// `text` followed by `stack`. Empty stack counts as absent.
pub fn render<'a>(text: &'a str, stack: Option<&str>) -> Cow<'a, str> {
    match stack {
        Some(stack) if !stack.is_empty() => Cow::Owned(concat2(text, stack)),
        _ => Cow::Borrowed(text),
    }
}

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    fn log_fmt(&self, args: std::fmt::Arguments<'_>, level: LogLevel) {
        match args.as_str() {
            Some(text) => self.log(text, None, level),
            None => self.log(&args.to_string(), None, level),
        }
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Log through the global console with format arguments
#[macro_export]
macro_rules! pl_log {
    ($($arg:tt)*) => {
        $crate::console::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! pl_warn {
    ($($arg:tt)*) => {
        $crate::console::log_warning(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! pl_error {
    ($($arg:tt)*) => {
        $crate::console::log_error(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryLogger;

    #[test]
    fn test_render_appends_stack() {
        assert_eq!(render("boom", Some(" at main")), "boom at main");
        assert_eq!(render("boom", None), "boom");
        assert_eq!(render("boom", Some("")), "boom");
        assert!(matches!(render("boom", None), Cow::Borrowed(_)));
    }

    #[test]
    fn test_log_fmt() {
        let logger = MemoryLogger::new();
        logger.log_fmt(format_args!("static"), LogLevel::Log);
        logger.log_fmt(format_args!("value={}", 3), LogLevel::Warning);

        assert_eq!(logger.texts(), vec!["static", "value=3"]);
        assert_eq!(logger.records()[1].level, LogLevel::Warning);
    }

    #[test]
    fn test_default_log_exception_is_silent() {
        let logger = MemoryLogger::new();
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        logger.log_exception(&err);
        assert!(logger.is_empty());
    }
}
