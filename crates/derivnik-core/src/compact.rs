//! One-level algebraic simplification of fresh derivative nodes.
//!
//! Applied to the result of each derivative step; this is not a rewrite
//! system, just the local identities that keep the graph from growing
//! without bound. When a node simplifies away, its slot is overwritten with
//! the replacement's contents so back-references keep working, and the
//! replacement id is returned for the parent edge.
//!
//! Only called from derivation, on nodes whose children are validly marked
//! for the current step. Lazy and Terminal nodes are never rewritten.

use crate::grammar::Grammar;
use crate::node::{EMPTY_ID, NULL_ID, NodeId, NodeKind};

impl<T: Clone + PartialEq> Grammar<T> {
    /// Overwrite `id` with `source` and return `source` for the parent edge.
    ///
    /// The marker stamp matters when `source` is a singleton: singletons are
    /// never swept, but their markers must not lag the node they replace.
    fn replace_with(&mut self, id: NodeId, source: NodeId) -> NodeId {
        let marker = self.arena.node(id).marker;
        self.arena.node_mut(source).marker = marker;
        self.overwrite(id, source);
        source
    }

    pub(crate) fn compact(&mut self, id: NodeId) -> NodeId {
        match self.arena.node(id).kind.clone() {
            NodeKind::Lazy { .. } | NodeKind::Terminal(_) => id,
            NodeKind::Null => NULL_ID,
            NodeKind::Empty => EMPTY_ID,
            NodeKind::Alternate { left, right } => {
                // ∅ | R → R and L | ∅ → L
                if matches!(self.arena.node(left).kind, NodeKind::Null) {
                    return self.replace_with(id, right);
                }
                if matches!(self.arena.node(right).kind, NodeKind::Null) {
                    return self.replace_with(id, left);
                }

                // Canonicalize ε children to the singleton, keeping ε on the
                // left so nullability short-circuits.
                let mut left = left;
                let mut right = right;
                if matches!(self.arena.node(left).kind, NodeKind::Empty) {
                    self.set_alternate_children(id, EMPTY_ID, right);
                    left = EMPTY_ID;
                }
                if matches!(self.arena.node(right).kind, NodeKind::Empty) {
                    self.set_alternate_children(id, EMPTY_ID, left);
                    right = left;
                    left = EMPTY_ID;
                }

                // X | X → X
                if left == right {
                    return self.replace_with(id, left);
                }
                id
            }
            NodeKind::Sequence { left, right } => {
                // ∅ · R → ∅ and L · ∅ → ∅
                if matches!(self.arena.node(left).kind, NodeKind::Null)
                    || matches!(self.arena.node(right).kind, NodeKind::Null)
                {
                    return self.replace_with(id, NULL_ID);
                }
                // ε · R → R
                if matches!(self.arena.node(left).kind, NodeKind::Empty) {
                    return self.replace_with(id, right);
                }
                // L · ε → L
                if matches!(self.arena.node(right).kind, NodeKind::Empty) {
                    return self.replace_with(id, left);
                }
                id
            }
            NodeKind::Repetition { pattern } => {
                // ∅* → ε and ε* → ε
                if matches!(
                    self.arena.node(pattern).kind,
                    NodeKind::Null | NodeKind::Empty
                ) {
                    return self.replace_with(id, EMPTY_ID);
                }
                id
            }
        }
    }

    fn set_alternate_children(&mut self, id: NodeId, left: NodeId, right: NodeId) {
        match &mut self.arena.node_mut(id).kind {
            NodeKind::Alternate { left: l, right: r } => {
                *l = left;
                *r = right;
            }
            _ => unreachable!("not an alternation"),
        }
    }
}
