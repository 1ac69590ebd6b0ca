//! Tests for the arena's allocation, sweeping, and stash transfer.

use crate::arena::Arena;
use crate::node::{EMPTY_ID, NULL_ID, NodeKind};

fn arena_with(n: usize) -> (Arena<char>, Vec<u32>) {
    let mut arena = Arena::new();
    let ids = (0..n)
        .map(|_| arena.allocate(NodeKind::Terminal('x')))
        .collect();
    (arena, ids)
}

#[test]
fn singletons_are_seeded() {
    let arena: Arena<char> = Arena::new();
    assert!(matches!(arena.node(NULL_ID).kind, NodeKind::Null));
    assert!(matches!(arena.node(EMPTY_ID).kind, NodeKind::Empty));
    assert_eq!(arena.live_count(), 0);
    assert_eq!(arena.slot_count(), 2);
}

#[test]
fn allocate_appends_fresh_slots() {
    let (arena, ids) = arena_with(3);
    assert_eq!(ids, vec![2, 3, 4]);
    assert_eq!(arena.live_count(), 3);
    assert_eq!(arena.slot_count(), 5);
}

#[test]
fn allocate_recycles_dead_slots() {
    let (mut arena, _) = arena_with(3);
    arena.collect_all();
    assert_eq!(arena.free_count(), 3);

    let id = arena.allocate(NodeKind::Terminal('y'));
    assert!(id >= 2 && id <= 4, "recycled id, not a fresh slot");
    assert_eq!(arena.slot_count(), 5);
    assert_eq!(arena.free_count(), 2);
}

#[test]
fn recycled_nodes_have_reset_bookkeeping() {
    let mut arena: Arena<char> = Arena::new();
    let id = arena.allocate(NodeKind::Terminal('x'));
    {
        let node = arena.node_mut(id);
        node.marker = 7;
        node.memo = Some(0);
        node.fp_found = true;
        node.nullable = true;
    }
    arena.collect_all();

    let id = arena.allocate(NodeKind::Terminal('y'));
    let node = arena.node(id);
    assert_eq!(node.marker, 0);
    assert_eq!(node.memo, None);
    assert!(!node.fp_found);
    assert!(!node.nullable);
}

#[test]
fn collect_moves_only_matching_nodes() {
    let (mut arena, ids) = arena_with(4);
    arena.node_mut(ids[0]).marker = 1;
    arena.node_mut(ids[2]).marker = 1;

    arena.collect(|node| node.marker != 1);

    assert_eq!(arena.live_count(), 2);
    assert_eq!(arena.free_count(), 2);
    // After the sweep no live node can satisfy the predicate.
    arena.collect(|node| node.marker != 1);
    assert_eq!(arena.live_count(), 2);
}

#[test]
fn steal_and_give_round_trip() {
    let (mut arena, _) = arena_with(3);
    let mut stash = Vec::new();
    arena.steal(&mut stash);
    assert_eq!(stash.len(), 3);
    assert_eq!(arena.live_count(), 0);

    // Stashed nodes are invisible to collection.
    arena.collect(|_| true);
    assert_eq!(arena.free_count(), 0);

    arena.give(&mut stash);
    assert!(stash.is_empty());
    assert_eq!(arena.live_count(), 3);
}

#[test]
fn steal_appends_when_stash_is_nonempty() {
    let (mut arena, _) = arena_with(2);
    let mut stash = vec![99];
    arena.steal(&mut stash);
    assert_eq!(stash.len(), 3);
    assert_eq!(stash[0], 99);
}

#[test]
fn shrink_releases_trailing_dead_slots() {
    let (mut arena, ids) = arena_with(4);
    // Keep the first allocated node alive, drop the rest.
    arena.node_mut(ids[0]).marker = 1;
    arena.collect(|node| node.marker != 1);

    arena.shrink();
    // Slots above the surviving node are gone; the singletons and the
    // survivor remain.
    assert_eq!(arena.slot_count(), 3);
    assert_eq!(arena.free_count(), 0);
}

#[test]
fn shrink_keeps_interior_dead_slots_recyclable() {
    let (mut arena, ids) = arena_with(3);
    // Kill only the middle node: its slot cannot be released, so it must
    // stay on the free list.
    let middle = ids[1];
    arena.node_mut(middle).marker = u64::MAX;
    arena.collect(|node| node.marker == u64::MAX);
    assert_eq!(arena.free_count(), 1);

    arena.shrink();
    assert_eq!(arena.free_count(), 1);
    let id = arena.allocate(NodeKind::Terminal('z'));
    assert_eq!(id, middle);
}
