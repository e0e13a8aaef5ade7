//! printline Core
//!
//! A small logging facade: a pluggable [`Logger`], a process-wide console
//! that prefixes and forwards messages, and concatenation helpers that reuse
//! scratch buffers instead of allocating one per call.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use printline_core::{console, ConsoleLogger};
//!
//! // Bootstrap: pick the logger once, before anything logs
//! console::install_logger(Arc::new(ConsoleLogger::new())).unwrap();
//!
//! console::log("starting");
//! console::log_warning("cache cold");                  // "------> cache cold"
//! console::log_error_with_stack("failed", " at load"); // "-!!!!!!-> failed"
//! console::system_log("tick");                         // "[12:00:01][00:00:03] tick"
//! ```

pub mod bridge;
pub mod concat;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod process_clock;
pub mod scratch;
pub mod sink;
pub mod system_log;

// Re-export commonly used types
pub use concat::{FastConcat, FastJoin};
pub use config::{ConfigError, ConfigResult, ConsoleConfig};
pub use console::{Console, ConsoleBuilder, ERROR_MARKER, WARNING_MARKER};
pub use error::{ConsoleError, ConsoleResult};
pub use logging::{
    ConsoleLogger, LogLevel, LogRecord, Logger, LoggerExt, MemoryLogger, NoOpLogger,
    SharedLogger,
};
pub use process_clock::ProcessClock;
pub use sink::{MemorySink, OutputTarget, SharedSink, Sink, StderrSink, StdoutSink};
pub use system_log::SystemLog;
