//! Console facade
//!
//! A [`Console`] prefixes messages, then hands them to its [`Logger`](crate::logging::Logger). One
//! console serves the whole process through the free functions in this
//! module; it is set once during bootstrap with [`install`] or created with
//! defaults on the first log call.
//!
//! ```
//! use std::sync::Arc;
//! use printline_core::console::Console;
//! use printline_core::logging::{LogLevel, MemoryLogger};
//!
//! let memory = Arc::new(MemoryLogger::new());
//! let console = Console::builder().logger(memory.clone()).build();
//!
//! console.log_warning("disk almost full");
//! assert_eq!(memory.texts(), vec!["------> disk almost full"]);
//! assert_eq!(memory.records()[0].level, LogLevel::Warning);
//! ```

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, ConsoleResult};
use crate::logging::{ConsoleLogger, LogLevel, SharedLogger};
use crate::process_clock::ProcessClock;
use crate::scratch::ScratchBuffer;
use crate::sink::SharedSink;
use crate::system_log::SystemLog;

/// Prepended to warnings
pub const WARNING_MARKER: &str = "------> ";

/// Prepended to errors
pub const ERROR_MARKER: &str = "-!!!!!!-> ";

/// Prefixing front end over a [`Logger`](crate::logging::Logger)
pub struct Console {
    logger: SharedLogger,
    system: Arc<SystemLog>,
    scratch: ScratchBuffer,
    batch_log: AtomicBool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Console with the default logger on standard output
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    /// Console with the default logger, shaped by `config`
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::builder().config(config.clone()).build()
    }

    /// The logger every non-system call is delegated to
    pub fn logger(&self) -> &SharedLogger {
        &self.logger
    }

    pub fn system(&self) -> &Arc<SystemLog> {
        &self.system
    }

    pub fn log(&self, text: &str) {
        self.logger.log(text, None, LogLevel::Log);
    }

    pub fn log_warning(&self, text: &str) {
        let line = self.prefixed(WARNING_MARKER, text);
        self.logger.log(&line, None, LogLevel::Warning);
    }

    pub fn log_error(&self, text: &str) {
        let line = self.prefixed(ERROR_MARKER, text);
        self.logger.log(&line, None, LogLevel::Error);
    }

    /// Like [`Console::log_error`], forwarding `stack` untouched
    pub fn log_error_with_stack(&self, text: &str, stack: &str) {
        let line = self.prefixed(ERROR_MARKER, text);
        self.logger.log(&line, Some(stack), LogLevel::Error);
    }

    /// Hand a native error to the logger; a no-op unless the logger is host-backed
    pub fn log_exception(&self, error: &(dyn Error + 'static)) {
        self.logger.log_exception(error);
    }

    /// Write a timestamped line straight to the sink, skipping the logger
    pub fn system_log(&self, text: &str) {
        self.system.write(text);
    }

    /// Batch flag. Nothing reads it; it is kept for configuration compatibility.
    pub fn batch_log(&self) -> bool {
        self.batch_log.load(Ordering::Relaxed)
    }

    pub fn set_batch_log(&self, enabled: bool) {
        self.batch_log.store(enabled, Ordering::Relaxed);
    }

    // The lock covers the buffer only; the logger runs after it is released.
    fn prefixed(&self, marker: &str, text: &str) -> String {
        self.scratch.build(|buf| {
            buf.push_str(marker);
            buf.push_str(text);
        })
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("system", &self.system)
            .field("batch_log", &self.batch_log())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Console`]
#[derive(Default)]
pub struct ConsoleBuilder {
    logger: Option<SharedLogger>,
    sink: Option<SharedSink>,
    clock: Option<ProcessClock>,
    config: ConsoleConfig,
}

impl ConsoleBuilder {
    /// Use a custom logger instead of [`ConsoleLogger`]
    pub fn logger(mut self, logger: SharedLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Sink for system log lines, overriding the configured target
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn clock(mut self, clock: ProcessClock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Console {
        let sink = self.sink.unwrap_or_else(|| self.config.target.sink());
        let clock = self.clock.unwrap_or_default();
        let system = Arc::new(
            SystemLog::new(sink, clock).with_capacity(self.config.scratch_capacity),
        );

        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(ConsoleLogger::with_system_log(Arc::clone(&system))));

        Console {
            logger,
            system,
            scratch: ScratchBuffer::with_capacity(self.config.scratch_capacity),
            batch_log: AtomicBool::new(self.config.batch_log),
        }
    }
}

/// The process-wide console
static CONSOLE: OnceCell<Console> = OnceCell::new();

/// Set the process-wide console
///
/// Succeeds only once, and only before the first log call through this
/// module; afterwards the slot is fixed.
pub fn install(console: Console) -> ConsoleResult<()> {
    CONSOLE
        .set(console)
        .map_err(|_| ConsoleError::AlreadyInstalled)?;
    log::debug!("printline console installed");
    Ok(())
}

/// Install a console that delegates to `logger`
pub fn install_logger(logger: SharedLogger) -> ConsoleResult<()> {
    install(Console::builder().logger(logger).build())
}

/// Install a default console configured from file and environment
pub fn install_from_env() -> ConsoleResult<()> {
    let config = ConsoleConfig::load()?;
    install(Console::from_config(&config))?;
    log::debug!(
        "printline console writing to {} (batch_log={})",
        config.target.as_str(),
        config.batch_log
    );
    Ok(())
}

pub fn is_installed() -> bool {
    CONSOLE.get().is_some()
}

/// The installed console, without installing the default one
pub fn installed() -> Option<&'static Console> {
    CONSOLE.get()
}

/// The active console, installing the default one if none was set
pub fn global() -> &'static Console {
    CONSOLE.get_or_init(Console::new)
}

pub fn log(text: &str) {
    global().log(text);
}

pub fn log_warning(text: &str) {
    global().log_warning(text);
}

pub fn log_error(text: &str) {
    global().log_error(text);
}

pub fn log_error_with_stack(text: &str, stack: &str) {
    global().log_error_with_stack(text, stack);
}

pub fn log_exception(error: &(dyn Error + 'static)) {
    global().log_exception(error);
}

pub fn system_log(text: &str) {
    global().system_log(text);
}

pub fn batch_log() -> bool {
    global().batch_log()
}

pub fn set_batch_log(enabled: bool) {
    global().set_batch_log(enabled);
}
