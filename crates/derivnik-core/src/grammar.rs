//! Grammar construction.
//!
//! A `Grammar` owns the arena and the step counter, and exposes the
//! combinators that build language nodes: terminals, alternation,
//! concatenation, repetition, and the sugar on top of them. Recursive
//! grammars are tied with `placeholder` + `define`, which fills a
//! pre-allocated node in place so back-references stay valid.

use crate::arena::Arena;
use crate::node::{EMPTY_ID, NULL_ID, Node, NodeId, NodeKind};

/// A grammar graph plus the bookkeeping shared by every pass over it.
///
/// `step` is the mark-sweep epoch and memo invalidation stamp; it only ever
/// increases over the grammar's lifetime.
#[derive(Debug)]
pub struct Grammar<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) step: u64,
}

impl<T> Grammar<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            step: 0,
        }
    }

    /// The language ∅: matches nothing.
    pub fn null(&self) -> NodeId {
        NULL_ID
    }

    /// The language {ε}: matches only the empty input.
    pub fn empty(&self) -> NodeId {
        EMPTY_ID
    }

    /// The variant tag and children of a node.
    pub fn kind(&self, id: NodeId) -> &NodeKind<T> {
        &self.arena.node(id).kind
    }

    /// The arena backing this grammar (counters are useful in tests and
    /// tracing; nodes themselves are reachable through `kind`).
    pub fn arena(&self) -> &Arena<T> {
        &self.arena
    }
}

impl<T: Clone + PartialEq> Grammar<T> {
    /// The language {⟨t⟩}: matches exactly this one-token sequence.
    pub fn terminal(&mut self, token: T) -> NodeId {
        self.arena.allocate(NodeKind::Terminal(token))
    }

    /// L ∪ R.
    pub fn alternate(&mut self, left: NodeId, right: NodeId) -> NodeId {
        debug_assert!(self.arena.contains(left) && self.arena.contains(right));
        self.arena.allocate(NodeKind::Alternate { left, right })
    }

    /// Concatenation: a string of L followed by a string of R.
    pub fn sequence(&mut self, left: NodeId, right: NodeId) -> NodeId {
        debug_assert!(self.arena.contains(left) && self.arena.contains(right));
        self.arena.allocate(NodeKind::Sequence { left, right })
    }

    /// Kleene star: zero or more strings of `pattern`.
    pub fn repetition(&mut self, pattern: NodeId) -> NodeId {
        debug_assert!(self.arena.contains(pattern));
        self.arena.allocate(NodeKind::Repetition { pattern })
    }

    /// ε | p.
    pub fn optional(&mut self, pattern: NodeId) -> NodeId {
        self.alternate(EMPTY_ID, pattern)
    }

    /// p · p*.
    pub fn one_or_more(&mut self, pattern: NodeId) -> NodeId {
        let star = self.repetition(pattern);
        self.sequence(pattern, star)
    }

    /// Right-nested Sequence chain over a multi-token literal; ε when the
    /// literal is empty.
    pub fn literal<I>(&mut self, tokens: I) -> NodeId
    where
        I: IntoIterator<Item = T>,
    {
        let tokens: Vec<T> = tokens.into_iter().collect();
        let mut iter = tokens.into_iter().rev();
        let Some(last) = iter.next() else {
            return EMPTY_ID;
        };
        let mut lang = self.terminal(last);
        for token in iter {
            let head = self.terminal(token);
            lang = self.sequence(head, lang);
            // A terminal chain can never match ε; seed the fixed point.
            let node = self.arena.node_mut(lang);
            node.fp_found = true;
            node.nullable = false;
        }
        lang
    }

    /// Right-nested Alternate chain over single-token terminals (a character
    /// class); ε when the set is empty.
    pub fn one_of<I>(&mut self, tokens: I) -> NodeId
    where
        I: IntoIterator<Item = T>,
    {
        let tokens: Vec<T> = tokens.into_iter().collect();
        let mut iter = tokens.into_iter().rev();
        let Some(last) = iter.next() else {
            return EMPTY_ID;
        };
        let mut lang = self.terminal(last);
        for token in iter {
            let head = self.terminal(token);
            lang = self.alternate(head, lang);
            let node = self.arena.node_mut(lang);
            node.fp_found = true;
            node.nullable = false;
        }
        lang
    }

    /// Allocate a node to be filled in later with `define`.
    ///
    /// Until defined it is the null language. This is how cyclic grammars
    /// are expressed: allocate the placeholder, reference it while building
    /// the body, then define it with the finished body.
    pub fn placeholder(&mut self) -> NodeId {
        self.arena.allocate(NodeKind::Null)
    }

    /// Copy `source`'s contents into `target`, preserving `target`'s
    /// identity so existing references to it see the new definition.
    pub fn define(&mut self, target: NodeId, source: NodeId) {
        debug_assert!(self.arena.contains(target) && self.arena.contains(source));
        debug_assert!(
            target != NULL_ID && target != EMPTY_ID,
            "cannot redefine a singleton"
        );
        let node: Node<T> = self.arena.node(source).clone();
        *self.arena.node_mut(target) = node;
    }
}

impl<T> Default for Grammar<T> {
    fn default() -> Self {
        Self::new()
    }
}
