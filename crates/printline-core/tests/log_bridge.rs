//! `log` records routed through the bridge into the process-wide console

use std::sync::Arc;

use log::LevelFilter;

use printline_core::bridge;
use printline_core::console::{self, Console};
use printline_core::logging::{LogLevel, Logger, MemoryLogger};
use printline_core::sink::MemorySink;

/// Records calls, then logs about them through the `log` crate
struct EchoingLogger {
    memory: MemoryLogger,
}

impl Logger for EchoingLogger {
    fn log(&self, text: &str, stack: Option<&str>, level: LogLevel) {
        self.memory.log(text, stack, level);
        log::error!("echo of {}", text);
    }
}

#[test]
fn test_log_macros_reach_installed_console() {
    bridge::init(LevelFilter::Debug).unwrap();

    // Before install: handled without taking the slot
    log::warn!("early warning");
    assert!(!console::is_installed());

    let logger = Arc::new(EchoingLogger {
        memory: MemoryLogger::new(),
    });
    let sink = Arc::new(MemorySink::new());
    console::install(
        Console::builder()
            .logger(logger.clone())
            .sink(sink.clone())
            .build(),
    )
    .unwrap();

    // The install notice came back through the bridge into the new console
    let records = logger.memory.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, LogLevel::Log);
    assert_eq!(records[0].text, "printline console installed");

    log::set_max_level(LevelFilter::Warn);
    log::info!("filtered out");
    log::warn!("disk {}", "full");
    log::error!("write failed");

    // The logger's own echoes are dropped instead of recursing
    let texts = logger.memory.texts();
    assert_eq!(
        texts,
        vec![
            "printline console installed",
            "------> disk full",
            "-!!!!!!-> write failed",
        ]
    );

    let levels: Vec<LogLevel> = logger.memory.records().iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![LogLevel::Log, LogLevel::Warning, LogLevel::Error]);

    // Nothing went to the system log sink
    assert!(sink.is_empty());
}
