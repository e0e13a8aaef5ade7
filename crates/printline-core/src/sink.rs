//! Output sinks for finished log lines

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Final destination of a formatted line
///
/// Implementations:
/// - `StdoutSink` / `StderrSink`: the hosting process's std streams
/// - `MemorySink`: keeps lines in memory
/// - Python adapter: writes to `sys.stdout` of the embedding interpreter
pub trait Sink: Send + Sync {
    /// Write one line. `line` already carries its trailing newline.
    ///
    /// Failures are swallowed; a sink never faults its caller.
    fn write_line(&self, line: &str);
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;

/// Writes to the process's standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }
}

/// Writes to the process's standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, line: &str) {
        let mut err = std::io::stderr().lock();
        let _ = err.write_all(line.as_bytes());
    }
}

/// Keeps every line written to it
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, in order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }
}

/// Standard stream selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

impl OutputTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputTarget::Stdout => "stdout",
            OutputTarget::Stderr => "stderr",
        }
    }

    /// Parse a target name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "stdout" => Some(OutputTarget::Stdout),
            "stderr" => Some(OutputTarget::Stderr),
            _ => None,
        }
    }

    /// Build the sink for this target
    pub fn sink(&self) -> SharedSink {
        match self {
            OutputTarget::Stdout => Arc::new(StdoutSink),
            OutputTarget::Stderr => Arc::new(StderrSink),
        }
    }
}
