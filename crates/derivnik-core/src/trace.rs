//! Tracing for recognition runs.
//!
//! The tracer is a zero-cost abstraction: `NoopTracer`'s methods are
//! `#[inline(always)]` empty functions, so the untraced `recognize` path
//! compiles down to no tracer work at all. Tracing never alters recognition
//! semantics; it only observes the driver between steps.

use std::fmt;

/// Observer for the recognizer driver.
///
/// - `trace_token` runs after a token is consumed and the stale sweep for
///   that step has finished.
/// - `trace_verdict` runs once, after the final nullability query.
pub trait Tracer<T> {
    fn trace_token(&mut self, ordinal: u64, token: &T, live: usize);

    fn trace_verdict(&mut self, matched: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl<T> Tracer<T> for NoopTracer {
    #[inline(always)]
    fn trace_token(&mut self, _ordinal: u64, _token: &T, _live: usize) {}

    #[inline(always)]
    fn trace_verdict(&mut self, _matched: bool) {}
}

/// Tracer that collects one line per consumed token.
#[derive(Default)]
pub struct PrintTracer {
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all collected lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }
}

impl<T: fmt::Debug> Tracer<T> for PrintTracer {
    fn trace_token(&mut self, ordinal: u64, token: &T, live: usize) {
        self.lines
            .push(format!("step {ordinal}: {token:?} ({live} live)"));
    }

    fn trace_verdict(&mut self, matched: bool) {
        self.lines
            .push(if matched { "matched" } else { "no match" }.to_string());
    }
}
