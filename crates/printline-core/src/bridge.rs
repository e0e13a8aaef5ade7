//! Route `log` crate records into the console facade

use std::cell::Cell;

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use once_cell::sync::Lazy;

use crate::console::{self, Console};
use crate::logging::LogLevel;

/// `log::Log` implementation forwarding to the global console
///
/// `Error` records become [`console::log_error`], `Warn` records
/// [`console::log_warning`], everything else plain [`console::log`].
/// Records arriving before [`console::install`] go to a default console
/// that never occupies the process-wide slot, so bootstrap diagnostics cannot
/// block a later install. A record emitted while the bridge is already
/// forwarding on the same thread (a logger that itself uses `log` macros) is
/// dropped.
#[derive(Debug, Default)]
pub struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

static PRE_INSTALL: Lazy<Console> = Lazy::new(Console::new);

thread_local! {
    static FORWARDING: Cell<bool> = const { Cell::new(false) };
}

/// Clears the forwarding flag when dropped, panics included
struct ForwardingGuard;

impl ForwardingGuard {
    fn enter() -> Option<Self> {
        let entered = FORWARDING.try_with(|flag| !flag.replace(true)).unwrap_or(false);
        entered.then_some(ForwardingGuard)
    }
}

impl Drop for ForwardingGuard {
    fn drop(&mut self) {
        let _ = FORWARDING.try_with(|flag| flag.set(false));
    }
}

impl LogBridge {
    /// Map a `log` level onto a facade level
    pub fn level_for(level: Level) -> LogLevel {
        match level {
            Level::Error => LogLevel::Error,
            Level::Warn => LogLevel::Warning,
            Level::Info | Level::Debug | Level::Trace => LogLevel::Log,
        }
    }

    /// Forward one record to `console`
    pub fn forward(console: &Console, record: &Record<'_>) {
        let text = match record.args().as_str() {
            Some(text) => text.to_string(),
            None => record.args().to_string(),
        };

        match Self::level_for(record.level()) {
            LogLevel::Error => console.log_error(&text),
            LogLevel::Warning => console.log_warning(&text),
            _ => console.log(&text),
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let Some(_guard) = ForwardingGuard::enter() else {
            return;
        };
        let target = console::installed().unwrap_or(&*PRE_INSTALL);
        Self::forward(target, record);
    }

    fn flush(&self) {}
}

/// Register the bridge as the `log` backend, passing records up to `max_level`
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryLogger;
    use std::sync::Arc;

    #[test]
    fn test_level_mapping() {
        assert_eq!(LogBridge::level_for(Level::Error), LogLevel::Error);
        assert_eq!(LogBridge::level_for(Level::Warn), LogLevel::Warning);
        assert_eq!(LogBridge::level_for(Level::Info), LogLevel::Log);
        assert_eq!(LogBridge::level_for(Level::Trace), LogLevel::Log);
    }

    #[test]
    fn test_forwarding_guard_blocks_reentry() {
        let outer = ForwardingGuard::enter();
        assert!(outer.is_some());
        assert!(ForwardingGuard::enter().is_none());

        drop(outer);
        assert!(ForwardingGuard::enter().is_some());
    }

    #[test]
    fn test_forward_applies_markers() {
        let memory = Arc::new(MemoryLogger::new());
        let console = Console::builder().logger(memory.clone()).build();

        LogBridge::forward(
            &console,
            &Record::builder()
                .args(format_args!("disk {}", "full"))
                .level(Level::Warn)
                .build(),
        );
        LogBridge::forward(
            &console,
            &Record::builder()
                .args(format_args!("started"))
                .level(Level::Info)
                .build(),
        );

        assert_eq!(memory.texts(), vec!["------> disk full", "started"]);
    }
}
