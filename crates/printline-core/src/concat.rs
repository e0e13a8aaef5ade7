//! String concatenation without a fresh buffer per call
//!
//! Each helper builds its result in the calling thread's scratch buffer and
//! returns one owned snapshot, so the only allocation per call is the result.
//!
//! ```
//! use printline_core::concat::{FastConcat, FastJoin};
//!
//! assert_eq!("frame ".fast_concat(&42), "frame 42");
//! assert_eq!(["a", "b", "c"].fast_join_with("!"), "abc!");
//! ```

use std::fmt::{self, Write};

use crate::scratch::with_thread_scratch;

fn push_display<T: fmt::Display + ?Sized>(buf: &mut String, value: &T) {
    // Writing into a String cannot fail
    let _ = write!(buf, "{}", value);
}

/// Concatenate a string with any displayable value
pub fn concat2<T: fmt::Display + ?Sized>(a: &str, b: &T) -> String {
    with_thread_scratch(|buf| {
        buf.push_str(a);
        push_display(buf, b);
    })
}

pub fn concat3(a: &str, b: &str, c: &str) -> String {
    join(&[a, b, c])
}

pub fn concat4(a: &str, b: &str, c: &str, d: &str) -> String {
    join(&[a, b, c, d])
}

pub fn concat5(a: &str, b: &str, c: &str, d: &str, e: &str) -> String {
    join(&[a, b, c, d, e])
}

/// Concatenate every part in order
pub fn join(parts: &[&str]) -> String {
    with_thread_scratch(|buf| {
        for part in parts {
            buf.push_str(part);
        }
    })
}

/// Concatenate every part in order, then `tail`
pub fn join_with(parts: &[&str], tail: &str) -> String {
    with_thread_scratch(|buf| {
        for part in parts {
            buf.push_str(part);
        }
        buf.push_str(tail);
    })
}

/// Method-call form of the concat helpers
pub trait FastConcat {
    fn fast_concat<T: fmt::Display + ?Sized>(&self, other: &T) -> String;
    fn fast_concat3(&self, b: &str, c: &str) -> String;
    fn fast_concat4(&self, b: &str, c: &str, d: &str) -> String;
    fn fast_concat5(&self, b: &str, c: &str, d: &str, e: &str) -> String;
}

impl FastConcat for str {
    fn fast_concat<T: fmt::Display + ?Sized>(&self, other: &T) -> String {
        concat2(self, other)
    }

    fn fast_concat3(&self, b: &str, c: &str) -> String {
        concat3(self, b, c)
    }

    fn fast_concat4(&self, b: &str, c: &str, d: &str) -> String {
        concat4(self, b, c, d)
    }

    fn fast_concat5(&self, b: &str, c: &str, d: &str, e: &str) -> String {
        concat5(self, b, c, d, e)
    }
}

/// Method-call form of [`join`] and [`join_with`]
pub trait FastJoin {
    fn fast_join(&self) -> String;
    fn fast_join_with(&self, tail: &str) -> String;
}

impl FastJoin for [&str] {
    fn fast_join(&self) -> String {
        join(self)
    }

    fn fast_join_with(&self, tail: &str) -> String {
        join_with(self, tail)
    }
}

impl<const N: usize> FastJoin for [&str; N] {
    fn fast_join(&self) -> String {
        join(self)
    }

    fn fast_join_with(&self, tail: &str) -> String {
        join_with(self, tail)
    }
}
