//! Nullability: does the language accept the empty input?
//!
//! Alternate and Sequence are computed as a least fixed point over the
//! possibly-cyclic subgraph, Kildall-style on the two-element lattice with
//! bottom `false`. Bottom `false` is the safe answer for non-nullable
//! cycles such as `s = s · a`. Re-entering a node mid-iteration returns its
//! current cached value, which is what breaks cycles; the lattice has two
//! elements and the update is monotone, so each node settles after at most
//! one extra sweep.

use crate::grammar::Grammar;
use crate::node::{NodeId, NodeKind};

impl<T: Clone + PartialEq> Grammar<T> {
    pub(crate) fn is_nullable(&mut self, id: NodeId, step: u64) -> bool {
        match self.arena.node(id).kind.clone() {
            NodeKind::Null | NodeKind::Terminal(_) => false,
            NodeKind::Empty | NodeKind::Repetition { .. } => true,
            NodeKind::Lazy { .. } => {
                let forced = self.force(id, step);
                self.is_nullable(forced, step)
            }
            NodeKind::Alternate { .. } => self.fixed_point(id, step, true),
            NodeKind::Sequence { .. } => self.fixed_point(id, step, false),
        }
    }

    /// `any` selects the combine operator: OR for Alternate, AND for
    /// Sequence.
    fn fixed_point(&mut self, id: NodeId, step: u64, any: bool) -> bool {
        self.touch(id, step);
        if self.arena.node(id).fp_found {
            return self.arena.node(id).nullable;
        }

        {
            let node = self.arena.node_mut(id);
            node.fp_found = true;
            node.nullable = false;
        }

        let mut value = self.combine(id, step, any);
        self.arena.node_mut(id).nullable = value;
        loop {
            let next = self.combine(id, step, any);
            if next == value {
                break;
            }
            value = next;
            self.arena.node_mut(id).nullable = value;
        }
        value
    }

    /// Recombine from the node's current children, re-read each sweep;
    /// forcing mid-pass rewrites child contents in place.
    fn combine(&mut self, id: NodeId, step: u64, any: bool) -> bool {
        let (left, right) = match self.arena.node(id).kind {
            NodeKind::Alternate { left, right } | NodeKind::Sequence { left, right } => {
                (left, right)
            }
            _ => unreachable!("fixed point on a leaf node"),
        };
        if any {
            self.is_nullable(left, step) || self.is_nullable(right, step)
        } else {
            self.is_nullable(left, step) && self.is_nullable(right, step)
        }
    }
}
