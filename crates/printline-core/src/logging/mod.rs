//! Logging abstractions
//!
//! The [`Logger`] trait is the single seam between the console facade and
//! whatever actually prints: the default [`ConsoleLogger`], a silent
//! [`NoOpLogger`], a capturing [`MemoryLogger`], or a host-provided logger.

mod console;
mod level;
mod memory;
mod noop;
mod traits;

pub use console::ConsoleLogger;
pub use level::LogLevel;
pub use memory::{LogRecord, MemoryLogger};
pub use noop::NoOpLogger;
pub use traits::{render, BoxedLogger, Logger, LoggerExt, SharedLogger, EXCEPTION_UNSUPPORTED};
