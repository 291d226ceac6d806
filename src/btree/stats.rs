// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Per-tree instrumentation counters.
//!
//! Woven through the search/insert/delete paths so callers can quantify the
//! O(log N) claim made for the B-tree against a linear scan. `comparisons`
//! and `node_visits` are gated by `Tree`'s `collect_stats` flag (hot-path
//! counters); every other field is updated unconditionally, reflecting
//! attempts rather than only successes.

/// Snapshot of a tree's performance and structural counters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    /// Total number of allocated nodes.
    pub node_count: u64,
    /// Total number of distinct keys currently tracked (see `Tree::delete`
    /// for why this can drift from the number of keys a cursor will visit).
    pub key_count: u64,
    /// Distance from root to any leaf (a single-node tree has height 1).
    pub height: u32,
    /// Key comparisons performed by the search primitive.
    pub comparisons: u64,
    /// Nodes visited during descents.
    pub node_visits: u64,
    /// Node splits performed.
    pub splits: u64,
    /// Node merges performed (always 0: delete never rebalances).
    pub merges: u64,
    /// Total `search`/`contains` calls.
    pub search_ops: u64,
    /// Total `insert` calls.
    pub insert_ops: u64,
    /// Total `delete` calls.
    pub delete_ops: u64,
    /// `sum(num_keys) / (node_count * (order - 1))`, recomputed on snapshot.
    pub avg_fill_factor: f64,
}

impl Stats {
    /// Zero every counter except the structural ones (`node_count`,
    /// `key_count`, `height`) that reflect current tree shape rather than
    /// operation history.
    pub fn reset(&mut self) {
        let node_count = self.node_count;
        let key_count = self.key_count;
        let height = self.height;
        *self = Stats {
            node_count,
            key_count,
            height,
            ..Stats::default()
        };
    }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
