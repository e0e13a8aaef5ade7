//! Configuration reports what it loads and rejects through the `log` crate

use log::{Level, LevelFilter, Metadata, Record};
use parking_lot::Mutex;

use printline_core::config::{ConfigError, ConsoleConfig, ENV_TARGET};

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl log::Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: parking_lot::const_mutex(Vec::new()),
};

#[test]
fn test_config_events_reach_log_backend() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "batch_log: true\n").unwrap();

    let config = ConsoleConfig::load_from(&path).unwrap();
    assert!(config.batch_log);

    let mut config = ConsoleConfig::default();
    let err = config
        .apply_env_from(|key| (key == ENV_TARGET).then(|| "printer".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    let records = CAPTURE.records.lock().clone();
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Debug && msg.contains("config loaded from")));
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Warn && msg.contains("PRINTLINE_TARGET=\"printer\"")));
}
