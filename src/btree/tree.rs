// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! The B-tree itself: creation, point insert/search/delete, and the
//! top-down proactive splitting that keeps every leaf at uniform depth.
//!
//! ## Algorithm
//! Insertion never descends into a full node. Before recursing into a
//! child, the caller splits it if it is already at `order - 1` keys, so
//! the recursive step always lands in a node with room to spare. The
//! root is handled the same way one level up: if it is full, a fresh
//! internal root is grown around it and split immediately, which is the
//! only way the tree's height increases.

use super::cursor::Cursor;
use super::diagnostics::{fill_factor_totals, render_node, validate_node};
use super::node::{InternalNode, LeafNode, Node};
use super::search::search_node;
use super::stats::Stats;
use super::types::{Key, Order, Value};
use crate::error::ReedResult;

/// An in-memory ordered index over [`Key`] mapped to opaque [`Value`]
/// handles, backed by a B-tree of the configured [`Order`].
#[derive(Debug)]
pub struct Tree {
    pub(crate) root: Box<Node>,
    order: Order,
    stats: Stats,
    collect_stats: bool,
}

impl Tree {
    /// Create an empty tree with the given fanout.
    ///
    /// ## Error Conditions
    /// - `order` outside `[3, 1024]` (propagated from [`Order::new`])
    pub fn create(order: Order) -> ReedResult<Self> {
        Ok(Self {
            root: Box::new(Node::new_leaf()),
            order,
            stats: Stats {
                node_count: 1,
                height: 1,
                ..Stats::default()
            },
            collect_stats: true,
        })
    }

    /// Drop every key, returning the tree to its just-created state.
    /// Structural counters (`node_count`, `height`) reset to a single
    /// empty leaf; operation counters reset to zero.
    pub fn clear(&mut self) {
        self.root = Box::new(Node::new_leaf());
        self.stats = Stats {
            node_count: 1,
            height: 1,
            ..Stats::default()
        };
    }

    /// Consume the tree. Node memory is reclaimed by ordinary recursive
    /// `Drop` on `Box<Node>`; this method exists only to give the
    /// lifecycle an explicit terminal step to call.
    pub fn destroy(self) {}

    /// The tree's configured fanout.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Toggle collection of the hot-path counters (`comparisons`,
    /// `node_visits`). Structural and operation-count counters are
    /// always updated regardless of this flag.
    pub fn set_collect_stats(&mut self, enabled: bool) {
        self.collect_stats = enabled;
    }

    pub fn collect_stats(&self) -> bool {
        self.collect_stats
    }

    /// Insert `key` with `value`, or overwrite the value of an existing
    /// `key` in place (upsert). Splits any full node on the descent path
    /// before recursing into it, including the root.
    pub fn insert(&mut self, key: Key, value: Value) -> ReedResult<()> {
        self.stats.insert_ops += 1;

        if self.root.is_full(self.order.max_keys()) {
            let old_root = std::mem::replace(&mut self.root, Box::new(Node::new_leaf()));
            let new_root = InternalNode {
                keys: Vec::new(),
                children: vec![old_root],
            };
            self.root = Box::new(Node::Internal(new_root));
            self.stats.node_count += 1;
            self.stats.height += 1;

            let internal = self
                .root
                .as_internal_mut()
                .expect("root was just constructed as Node::Internal");
            split_child(internal, 0, self.order, &mut self.stats);
        }

        insert_non_full(
            &mut self.root,
            key,
            value,
            self.order,
            &mut self.stats,
            self.collect_stats,
        );
        Ok(())
    }

    /// Look up `key`, returning whether it was found and, separately, its
    /// value. These are independent: a key promoted to a bare internal
    /// separator is found (`true`) but carries no value at that node
    /// (`None`) — only a leaf position ever yields `Some`.
    ///
    /// ## Performance
    /// O(log N) descents, each doing an O(log order) binary search.
    pub fn search(&mut self, key: Key) -> (bool, Option<Value>) {
        self.stats.search_ops += 1;
        let collect = self.collect_stats;

        let mut current: &Node = self.root.as_ref();
        loop {
            if collect {
                self.stats.node_visits += 1;
            }

            let mut comparisons = 0u64;
            let result = search_node(current.keys(), key, || comparisons += 1);
            if collect {
                self.stats.comparisons += comparisons;
            }

            if result.found {
                let value = match current {
                    Node::Leaf(leaf) => leaf.values.get(result.index).copied(),
                    Node::Internal(_) => None,
                };
                return (true, value);
            }
            match current {
                Node::Leaf(_) => return (false, None),
                Node::Internal(internal) => {
                    current = internal.children[result.index].as_ref();
                }
            }
        }
    }

    /// `search(key).0` — true on an exact match at any level, regardless
    /// of whether a value is stored there.
    pub fn contains(&mut self, key: Key) -> bool {
        self.search(key).0
    }

    /// Degenerate delete: decrements `key_count` on a hit but leaves the
    /// key and value in place. No rebalancing or merging ever occurs —
    /// `Stats::merges` stays 0 for the life of the tree.
    pub fn delete(&mut self, key: Key) -> bool {
        self.stats.delete_ops += 1;
        if self.search(key).0 {
            self.stats.key_count = self.stats.key_count.saturating_sub(1);
            true
        } else {
            false
        }
    }

    /// Distance from root to any leaf. A single-node tree has height 1.
    pub fn height(&self) -> u32 {
        let mut height = 1;
        let mut node = self.root.as_ref();
        while let Node::Internal(internal) = node {
            height += 1;
            node = internal.children[0].as_ref();
        }
        height
    }

    /// Number of distinct keys currently tracked (mirrors
    /// `stats().key_count`).
    pub fn size(&self) -> u64 {
        self.stats.key_count
    }

    /// A snapshot of the current counters, with `height` and
    /// `avg_fill_factor` recomputed live by walking the tree.
    pub fn stats(&self) -> Stats {
        let mut snapshot = self.stats;
        snapshot.height = self.height();

        let mut total_keys = 0u64;
        let mut total_capacity = 0u64;
        fill_factor_totals(
            self.root.as_ref(),
            self.order.max_keys(),
            &mut total_keys,
            &mut total_capacity,
        );
        snapshot.avg_fill_factor = if total_capacity > 0 {
            total_keys as f64 / total_capacity as f64
        } else {
            0.0
        };

        snapshot
    }

    /// Zero every operation counter, preserving the structural ones.
    pub fn stats_reset(&mut self) {
        self.stats.reset();
    }

    /// Walk every node checking fanout bounds (root exempt), strictly
    /// increasing keys, and correct separator placement relative to
    /// children.
    pub fn validate(&self) -> bool {
        validate_node(self.root.as_ref(), self.order, None, None, true)
    }

    /// Indented pre-order structure dump, one line per node.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_node(self.root.as_ref(), 0, &mut out);
        out
    }

    /// An external cursor positioned before the first entry. Cursor
    /// methods borrow the tree immutably for their whole lifetime, so
    /// the borrow checker rejects any attempt to mutate the tree (via
    /// `insert`/`delete`/`search`, all `&mut self`) while a cursor is
    /// live.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }
}

/// Split `parent.children[idx]` in place: promote its median key into
/// `parent` at `idx`, and install the new right sibling at `idx + 1`.
pub(crate) fn split_child(parent: &mut InternalNode, idx: usize, order: Order, stats: &mut Stats) {
    let mid = order.max_keys() / 2;
    let (promoted, right) = split_node(parent.children[idx].as_mut(), mid);
    parent.insert_separator(idx, promoted, right);
    stats.node_count += 1;
    stats.splits += 1;
}

/// Split a single node at `mid`, returning the promoted separator key and
/// the new right-hand node. `child` is left holding only `keys[0..mid)`.
///
/// For a leaf split, the value paired with the promoted key is not
/// copied into either side — it is dropped. The key reappears as a pure
/// separator in the parent, but the value originally stored at that key
/// is lost. This mirrors the source B-tree's split behavior exactly and
/// is a known, accepted quirk rather than a bug: re-inserting the
/// promoted key afterward restores its value via the normal upsert path.
fn split_node(child: &mut Node, mid: usize) -> (Key, Box<Node>) {
    match child {
        Node::Leaf(leaf) => {
            let promoted = leaf.keys[mid];
            let right_keys = leaf.keys.split_off(mid + 1);
            let right_values = leaf.values.split_off(mid + 1);
            leaf.keys.truncate(mid);
            leaf.values.truncate(mid);
            (
                promoted,
                Box::new(Node::Leaf(LeafNode {
                    keys: right_keys,
                    values: right_values,
                })),
            )
        }
        Node::Internal(internal) => {
            let promoted = internal.keys[mid];
            let right_keys = internal.keys.split_off(mid + 1);
            let right_children = internal.children.split_off(mid + 1);
            internal.keys.truncate(mid);
            (
                promoted,
                Box::new(Node::Internal(InternalNode {
                    keys: right_keys,
                    children: right_children,
                })),
            )
        }
    }
}

/// Recursive insert helper: `node` is guaranteed to have room for one
/// more key on entry (the caller splits children before recursing).
fn insert_non_full(
    node: &mut Node,
    key: Key,
    value: Value,
    order: Order,
    stats: &mut Stats,
    collect_stats: bool,
) {
    if collect_stats {
        stats.node_visits += 1;
    }

    match node {
        Node::Leaf(leaf) => {
            let mut comparisons = 0u64;
            let result = search_node(&leaf.keys, key, || comparisons += 1);
            if collect_stats {
                stats.comparisons += comparisons;
            }

            if result.found {
                leaf.set_value(result.index, value);
            } else {
                leaf.insert_at(result.index, key, value);
                stats.key_count += 1;
            }
        }
        Node::Internal(internal) => {
            let mut comparisons = 0u64;
            let result = search_node(&internal.keys, key, || comparisons += 1);
            if collect_stats {
                stats.comparisons += comparisons;
            }

            let mut idx = if result.found {
                result.index + 1
            } else {
                result.index
            };

            if internal.children[idx].is_full(order.max_keys()) {
                split_child(internal, idx, order, stats);
                if key > internal.keys[idx] {
                    idx += 1;
                }
            }

            insert_non_full(
                &mut internal.children[idx],
                key,
                value,
                order,
                stats,
                collect_stats,
            );
        }
    }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
