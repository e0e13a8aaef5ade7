//! Timestamped lines written straight to a sink
//!
//! Line layout, relied on by log scrapers:
//!
//! ```text
//! [<local HH:MM:SS>][<elapsed HH:MM:SS>] <message>\n
//! ```

use std::fmt::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveTime};

use crate::process_clock::ProcessClock;
use crate::scratch::ScratchBuffer;
use crate::sink::{SharedSink, StdoutSink};

/// Width of the `.mmm` suffix cut off the elapsed field
const SUBSECOND_WIDTH: usize = 4;

/// Append one system log line to `buf`
///
/// Elapsed time is rendered with milliseconds first and the sub-second part is
/// then truncated off the buffer, leaving whole seconds.
pub fn format_line(buf: &mut String, local: NaiveTime, elapsed: Duration, text: &str) {
    // Writing into a String cannot fail
    let _ = write_line(buf, local, elapsed, text);
}

fn write_line(buf: &mut String, local: NaiveTime, elapsed: Duration, text: &str) -> fmt::Result {
    let secs = elapsed.as_secs();

    buf.push('[');
    write!(buf, "{}", local.format("%H:%M:%S"))?;
    buf.push_str("][");
    write!(
        buf,
        "{:02}:{:02}:{:02}.{:03}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60,
        elapsed.subsec_millis()
    )?;
    buf.truncate(buf.len() - SUBSECOND_WIDTH);
    buf.push_str("] ");
    buf.push_str(text);
    buf.push('\n');
    Ok(())
}

/// Writes timestamped lines to a sink, bypassing any logger
pub struct SystemLog {
    sink: SharedSink,
    clock: ProcessClock,
    scratch: ScratchBuffer,
}

impl Default for SystemLog {
    fn default() -> Self {
        Self::stdout()
    }
}

impl SystemLog {
    pub fn new(sink: SharedSink, clock: ProcessClock) -> Self {
        Self {
            sink,
            clock,
            scratch: ScratchBuffer::new(),
        }
    }

    /// System log on standard output, measured from process start
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutSink), ProcessClock::process())
    }

    /// Override the scratch buffer's initial capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.scratch = ScratchBuffer::with_capacity(capacity);
        self
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    pub fn clock(&self) -> ProcessClock {
        self.clock
    }

    /// Format `text` with the dual timestamp and hand it to the sink
    pub fn write(&self, text: &str) {
        let line = self.format(text);
        self.sink.write_line(&line);
    }

    /// Format `text` without writing it
    pub fn format(&self, text: &str) -> String {
        let local = Local::now().time();
        let elapsed = self.clock.elapsed();
        self.scratch.build(|buf| format_line(buf, local, elapsed, text))
    }
}

impl fmt::Debug for SystemLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemLog")
            .field("clock", &self.clock)
            .field("scratch", &self.scratch)
            .finish_non_exhaustive()
    }
}
