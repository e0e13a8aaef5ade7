//! Elapsed-time anchor for the system log prefix

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

static PROCESS_START: Lazy<Instant> = Lazy::new(|| {
    let now = Instant::now();
    match os_start_time().and_then(|started| SystemTime::now().duration_since(started).ok()) {
        Some(age) => now.checked_sub(age).unwrap_or(now),
        None => now,
    }
});

/// Start time of this process as reported by the OS, to the second
pub fn os_start_time() -> Option<SystemTime> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        false,
        ProcessRefreshKind::nothing(),
    );
    let secs = system.process(pid)?.start_time();
    (secs > 0).then(|| UNIX_EPOCH + Duration::from_secs(secs))
}

/// The process-wide anchor
///
/// This is the OS-reported process start. When the OS cannot report it, the
/// anchor is the first call to this function, so hosts on such platforms call
/// it early in `main`.
pub fn start() -> Instant {
    *PROCESS_START
}

/// Measures time elapsed since an anchor instant
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    anchor: Instant,
}

impl Default for ProcessClock {
    fn default() -> Self {
        Self::process()
    }
}

impl ProcessClock {
    /// Clock sharing the process-wide anchor
    pub fn process() -> Self {
        Self { anchor: start() }
    }

    /// Clock anchored at the current instant
    pub fn starting_now() -> Self {
        Self {
            anchor: Instant::now(),
        }
    }

    /// Clock anchored at a given instant
    pub fn starting_at(anchor: Instant) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> Instant {
        self.anchor
    }

    /// Time since the anchor. Never goes backwards.
    pub fn elapsed(&self) -> Duration {
        Instant::now().saturating_duration_since(self.anchor)
    }
}
