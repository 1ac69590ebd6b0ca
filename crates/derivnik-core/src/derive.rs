//! Brzozowski derivation with lazy nodes and per-step memoization.
//!
//! Deriving a composite node allocates a fresh shell whose children are
//! `Lazy` promises, memoizes the shell on the source node, and only then
//! forces the promises. Memoize-before-force is what makes cyclic grammars
//! terminate: when forcing recursively re-enters the source node it finds
//! the shell already reserved and reuses it instead of looping.
//!
//! Forcing a `Lazy` node overwrites it in place with the computed
//! derivative's contents, so every back-reference to the promise sees the
//! forced result from then on. Parent edges are additionally swung to the
//! node `force` returns, which keeps fresh graphs shallow.

use crate::grammar::Grammar;
use crate::node::{EMPTY_ID, NULL_ID, NodeId, NodeKind};

impl<T: Clone + PartialEq> Grammar<T> {
    /// First contact with a node in a step: stamp the marker and drop the
    /// caches that were only valid for earlier steps.
    pub(crate) fn touch(&mut self, id: NodeId, step: u64) {
        let node = self.arena.node_mut(id);
        if node.marker != step {
            node.marker = step;
            node.memo = None;
            node.fp_found = false;
        }
    }

    /// Allocate mid-step: fresh nodes are live in the current pass.
    fn allocate_stepped(&mut self, kind: NodeKind<T>, step: u64) -> NodeId {
        let id = self.arena.allocate(kind);
        self.arena.node_mut(id).marker = step;
        id
    }

    fn lazy(&mut self, pattern: NodeId, token: T, step: u64) -> NodeId {
        self.allocate_stepped(NodeKind::Lazy { pattern, token }, step)
    }

    /// Copy `source`'s full contents over `id`, preserving `id`'s identity.
    pub(crate) fn overwrite(&mut self, id: NodeId, source: NodeId) {
        let node = self.arena.node(source).clone();
        *self.arena.node_mut(id) = node;
    }

    fn set_left(&mut self, id: NodeId, child: NodeId) {
        match &mut self.arena.node_mut(id).kind {
            NodeKind::Alternate { left, .. } | NodeKind::Sequence { left, .. } => *left = child,
            _ => unreachable!("set_left on a node without a left child"),
        }
    }

    fn set_right(&mut self, id: NodeId, child: NodeId) {
        match &mut self.arena.node_mut(id).kind {
            NodeKind::Alternate { right, .. } | NodeKind::Sequence { right, .. } => *right = child,
            _ => unreachable!("set_right on a node without a right child"),
        }
    }

    /// The derivative of `id` with respect to `token`, for the current step.
    pub(crate) fn derive(&mut self, id: NodeId, token: &T, step: u64) -> NodeId {
        self.touch(id, step);

        match self.arena.node(id).kind.clone() {
            NodeKind::Lazy { .. } => {
                let forced = self.force(id, step);
                self.derive(forced, token, step)
            }
            NodeKind::Null | NodeKind::Empty => NULL_ID,
            NodeKind::Terminal(t) => {
                if t == *token {
                    EMPTY_ID
                } else {
                    NULL_ID
                }
            }
            NodeKind::Alternate { left, right } => {
                if let Some(memo) = self.arena.node(id).memo {
                    return memo;
                }

                // ∂ (L | R) = ∂L | ∂R
                let lazy_left = self.lazy(left, token.clone(), step);
                let lazy_right = self.lazy(right, token.clone(), step);
                let alt = self.allocate_stepped(
                    NodeKind::Alternate {
                        left: lazy_left,
                        right: lazy_right,
                    },
                    step,
                );
                self.arena.node_mut(id).memo = Some(alt);

                let forced = self.force(lazy_left, step);
                self.set_left(alt, forced);
                let forced = self.force(lazy_right, step);
                self.set_right(alt, forced);

                let result = self.compact(alt);
                self.arena.node_mut(id).memo = Some(result);
                result
            }
            NodeKind::Sequence { left, right } => {
                if let Some(memo) = self.arena.node(id).memo {
                    return memo;
                }

                // ∂ (L · R) = ∂L · R, plus ∂R when L is nullable.
                let lazy_left = self.lazy(left, token.clone(), step);
                let seq = self.allocate_stepped(
                    NodeKind::Sequence {
                        left: lazy_left,
                        right,
                    },
                    step,
                );
                self.mark(right, step);

                if self.is_nullable(left, step) {
                    let lazy_right = self.lazy(right, token.clone(), step);
                    let alt = self.allocate_stepped(
                        NodeKind::Alternate {
                            left: lazy_right,
                            right: seq,
                        },
                        step,
                    );
                    self.arena.node_mut(id).memo = Some(alt);

                    let forced = self.force(lazy_left, step);
                    self.set_left(seq, forced);
                    let forced = self.force(lazy_right, step);
                    self.set_left(alt, forced);

                    let compacted = self.compact(seq);
                    self.set_right(alt, compacted);

                    let result = self.compact(alt);
                    self.arena.node_mut(id).memo = Some(result);
                    result
                } else {
                    self.arena.node_mut(id).memo = Some(seq);

                    let forced = self.force(lazy_left, step);
                    self.set_left(seq, forced);

                    let result = self.compact(seq);
                    self.arena.node_mut(id).memo = Some(result);
                    result
                }
            }
            NodeKind::Repetition { pattern } => {
                if let Some(memo) = self.arena.node(id).memo {
                    return memo;
                }

                // ∂ (P*) = ∂P · P*; the right child is the back-edge to the
                // unchanged repetition itself.
                let lazy_pattern = self.lazy(pattern, token.clone(), step);
                let seq = self.allocate_stepped(
                    NodeKind::Sequence {
                        left: lazy_pattern,
                        right: id,
                    },
                    step,
                );
                self.arena.node_mut(id).memo = Some(seq);

                let forced = self.force(lazy_pattern, step);
                self.set_left(seq, forced);

                let result = self.compact(seq);
                self.arena.node_mut(id).memo = Some(result);
                result
            }
        }
    }

    /// Evaluate a `Lazy` promise; a no-op on anything else.
    ///
    /// The promise's slot is overwritten with the derivative's contents (so
    /// back-references resolve) and the derivative itself is returned (so
    /// parents can point straight at it).
    pub(crate) fn force(&mut self, id: NodeId, step: u64) -> NodeId {
        let (pattern, token) = match &self.arena.node(id).kind {
            NodeKind::Lazy { pattern, token } => (*pattern, token.clone()),
            _ => return id,
        };

        let pattern = self.force(pattern, step);
        let result = self.derive(pattern, &token, step);
        self.overwrite(id, result);
        result
    }

    /// Stamp a kept subgraph live for the current step.
    ///
    /// Used when a derivative references a node as-is (the right side of a
    /// sequence derivative): everything reachable from it must survive the
    /// end-of-step sweep, and its per-step caches are no longer valid.
    pub(crate) fn mark(&mut self, id: NodeId, step: u64) {
        if self.arena.node(id).marker == step {
            return;
        }
        self.touch(id, step);

        match self.arena.node(id).kind.clone() {
            NodeKind::Null | NodeKind::Empty | NodeKind::Terminal(_) => {}
            NodeKind::Lazy { pattern, .. } | NodeKind::Repetition { pattern } => {
                self.mark(pattern, step);
            }
            NodeKind::Alternate { left, right } | NodeKind::Sequence { left, right } => {
                self.mark(left, step);
                self.mark(right, step);
            }
        }
    }
}
