//! The recognizer driver.
//!
//! Drives derivation across the input one token at a time. Before the run,
//! the whole alive set (the user's grammar) is stolen into an invincible
//! stash so the per-step sweep can never reclaim it, even when parts of it
//! become temporarily unreferenced mid-derivation. After the final
//! nullability query everything the run allocated is dropped back onto the
//! free list and the stash is restored, so the same grammar can be run
//! again.

use crate::grammar::Grammar;
use crate::node::NodeId;
use crate::trace::{NoopTracer, Tracer};

impl<T: Clone + PartialEq> Grammar<T> {
    /// Does `input` belong to the language rooted at `root`?
    pub fn recognize<I>(&mut self, root: NodeId, input: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        self.recognize_traced(root, input, &mut NoopTracer)
    }

    /// `recognize` with an observer for each consumed token.
    pub fn recognize_traced<I, R>(&mut self, root: NodeId, input: I, tracer: &mut R) -> bool
    where
        I: IntoIterator<Item = T>,
        R: Tracer<T>,
    {
        debug_assert!(self.arena.contains(root), "foreign node handle");

        let mut frontier = Vec::new();
        self.arena.steal(&mut frontier);
        let base = self.step;
        for &id in &frontier {
            let node = self.arena.node_mut(id);
            node.marker = base;
            node.memo = None;
            node.fp_found = false;
        }

        let mut current = root;
        for token in input {
            // The step counter never rewinds; it doubles as the mark-sweep
            // epoch, so every node whose marker lags the step is garbage.
            self.step += 1;
            let step = self.step;
            current = self.derive(current, &token, step);
            self.arena.collect(|node| node.marker != step);
            tracer.trace_token(step - base, &token, self.arena.live_count());
        }

        let matched = self.is_nullable(current, self.step);

        self.arena.collect_all();
        self.arena.give(&mut frontier);
        tracer.trace_verdict(matched);
        matched
    }

    /// Does the language rooted at `root` accept the empty input?
    ///
    /// Equivalent to recognizing an empty input, and runs through the same
    /// stash/sweep discipline so repeated queries are safe.
    pub fn nullable(&mut self, root: NodeId) -> bool {
        self.recognize(root, std::iter::empty())
    }
}
