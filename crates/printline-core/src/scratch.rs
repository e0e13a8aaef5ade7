//! Reusable text buffers for building log lines
//!
//! Two flavours exist and they never share storage:
//! - [`ScratchBuffer`]: one `String` behind a mutex, owned by a console or a
//!   system log. Used where a single formatter serves every thread.
//! - [`with_thread_scratch`]: one `String` per thread, used by the concat
//!   helpers so they never contend on a lock.

use std::cell::RefCell;
use std::fmt;

use parking_lot::Mutex;

/// Initial capacity of every scratch buffer
pub const DEFAULT_CAPACITY: usize = 256;

/// A mutex-guarded `String` reused across formatting calls
///
/// Every call to [`ScratchBuffer::build`] clears the buffer, lets the caller
/// append into it, and returns an owned snapshot before the lock is dropped.
/// Nothing outside `build` ever sees the buffer.
pub struct ScratchBuffer {
    buf: Mutex<String>,
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScratchBuffer {
    /// Create a scratch buffer with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a scratch buffer with a custom initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Mutex::new(String::with_capacity(capacity)),
        }
    }

    /// Build a string in the shared buffer and return a snapshot of it
    pub fn build<F>(&self, fill: F) -> String
    where
        F: FnOnce(&mut String),
    {
        let mut buf = self.buf.lock();
        buf.clear();
        fill(&mut *buf);
        buf.as_str().to_owned()
    }

    /// Current capacity of the underlying buffer
    pub fn capacity(&self) -> usize {
        self.buf.lock().capacity()
    }
}

impl fmt::Debug for ScratchBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScratchBuffer")
            .field("capacity", &self.capacity())
            .finish()
    }
}

thread_local! {
    static THREAD_SCRATCH: RefCell<String> = RefCell::new(String::with_capacity(DEFAULT_CAPACITY));
}

/// Build a string in this thread's scratch buffer and return a snapshot
///
/// If the buffer is already borrowed further up the stack (a `Display` impl
/// that concatenates while being concatenated), a fresh buffer is used instead.
pub fn with_thread_scratch<F>(fill: F) -> String
where
    F: FnOnce(&mut String),
{
    let mut fill = Some(fill);

    let reused = THREAD_SCRATCH.try_with(|cell| {
        let mut buf = cell.try_borrow_mut().ok()?;
        buf.clear();
        (fill.take()?)(&mut *buf);
        Some(buf.as_str().to_owned())
    });

    match reused {
        Ok(Some(out)) => out,
        _ => {
            let mut out = String::with_capacity(DEFAULT_CAPACITY);
            if let Some(fill) = fill.take() {
                fill(&mut out);
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_resets_between_calls() {
        let scratch = ScratchBuffer::new();
        assert_eq!(scratch.build(|b| b.push_str("first call")), "first call");
        assert_eq!(scratch.build(|b| b.push_str("2nd")), "2nd");
        assert_eq!(scratch.build(|_| {}), "");
    }

    #[test]
    fn test_build_keeps_capacity() {
        let scratch = ScratchBuffer::with_capacity(16);
        let long = "x".repeat(1024);
        scratch.build(|b| b.push_str(&long));
        assert!(scratch.capacity() >= 1024);

        // Shrinking content does not give the allocation back
        scratch.build(|b| b.push('y'));
        assert!(scratch.capacity() >= 1024);
    }

    #[test]
    fn test_thread_scratch_reentrant() {
        let out = with_thread_scratch(|outer| {
            outer.push_str("outer:");
            let inner = with_thread_scratch(|b| b.push_str("inner"));
            outer.push_str(&inner);
        });
        assert_eq!(out, "outer:inner");
    }
}
