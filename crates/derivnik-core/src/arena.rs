//! Region allocator with mark-sweep recycling.
//!
//! Nodes live in a flat slot vector; the arena tracks which slots are alive
//! and which are dead (recyclable). Algorithm code never frees nodes
//! directly: after each derivation step the driver sweeps every alive node
//! whose marker is stale into the dead list, and `allocate` hands those
//! slots out again on later steps.
//!
//! The two distinguished slots (`NULL_ID`, `EMPTY_ID`) are seeded at
//! construction and sit outside both lists, so no sweep can ever reclaim
//! them.

use crate::node::{Node, NodeId, NodeKind};

/// Owns every node of one grammar graph.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Node<T>>,
    alive: Vec<NodeId>,
    dead: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: vec![Node::new(NodeKind::Null), Node::new(NodeKind::Empty)],
            alive: Vec::new(),
            dead: Vec::new(),
        }
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.slots[id as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.slots[id as usize]
    }

    /// Allocate a node, recycling a dead slot when one is available.
    ///
    /// The returned node has all bookkeeping reset (marker 0, no memo, no
    /// fixed-point state); callers that allocate mid-step stamp the marker
    /// themselves.
    pub fn allocate(&mut self, kind: NodeKind<T>) -> NodeId {
        let id = match self.dead.pop() {
            Some(id) => {
                self.slots[id as usize] = Node::new(kind);
                id
            }
            None => {
                let id = self.slots.len() as NodeId;
                self.slots.push(Node::new(kind));
                id
            }
        };
        self.alive.push(id);
        id
    }

    /// Move every alive node for which `pred` holds to the dead list.
    ///
    /// After this returns no alive node satisfies `pred`. Handles to dead
    /// nodes must not be dereferenced until they come back from `allocate`.
    pub fn collect<P>(&mut self, pred: P)
    where
        P: Fn(&Node<T>) -> bool,
    {
        let mut i = 0;
        while i < self.alive.len() {
            let id = self.alive[i];
            if pred(&self.slots[id as usize]) {
                self.dead.push(id);
                self.alive.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Move every alive node to the dead list.
    pub fn collect_all(&mut self) {
        if self.dead.is_empty() {
            std::mem::swap(&mut self.dead, &mut self.alive);
        } else {
            self.dead.append(&mut self.alive);
        }
    }

    /// Hand the entire alive list to the caller.
    ///
    /// Used to stash nodes that must survive collection regardless of their
    /// markers (the user's grammar across a recognition run). Stashed ids
    /// stay valid; they are simply invisible to `collect` until given back.
    pub fn steal(&mut self, out: &mut Vec<NodeId>) {
        if out.is_empty() {
            std::mem::swap(out, &mut self.alive);
        } else {
            out.append(&mut self.alive);
        }
    }

    /// Return previously stolen nodes to the alive list.
    pub fn give(&mut self, stash: &mut Vec<NodeId>) {
        if self.alive.is_empty() {
            std::mem::swap(&mut self.alive, stash);
        } else {
            self.alive.append(stash);
        }
    }

    /// Release dead slots at the tail of the slot vector.
    ///
    /// An index arena cannot free interior slots one by one; those stay on
    /// the free list for recycling. Trailing dead slots are truly dropped.
    pub fn shrink(&mut self) {
        self.dead.sort_unstable();
        while let Some(&id) = self.dead.last() {
            if id as usize + 1 == self.slots.len() {
                self.dead.pop();
                self.slots.pop();
            } else {
                break;
            }
        }
        self.slots.shrink_to_fit();
    }

    pub fn live_count(&self) -> usize {
        self.alive.len()
    }

    pub fn free_count(&self) -> usize {
        self.dead.len()
    }

    /// Number of slots currently backing the arena, singletons included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        (id as usize) < self.slots.len()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
