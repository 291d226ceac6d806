// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Full-tree diagnostics: structural validation, the fill-factor
//! calculation backing `Stats::avg_fill_factor`, and the pretty-printer.
//!
//! These are read-only, recursive walks over the tree and never touch the
//! instrumentation counters themselves (that happens in `tree.rs`, which
//! recomputes `height` and `avg_fill_factor` on every `stats_snapshot`
//! call using the functions here).

use super::node::Node;
use super::types::{Key, Order};

/// Recursive structural check: fanout bounds (root exempt), strictly
/// increasing keys per node, and key-separation bounds threaded down as
/// `(min_exclusive, max_exclusive)`.
pub(crate) fn validate_node(
    node: &Node,
    order: Order,
    min_exclusive: Option<Key>,
    max_exclusive: Option<Key>,
    is_root: bool,
) -> bool {
    let num_keys = node.num_keys();

    if !is_root && num_keys < order.min_keys() {
        return false;
    }
    if num_keys > order.max_keys() {
        return false;
    }

    let keys = node.keys();
    if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
        return false;
    }
    if let (Some(first), Some(min)) = (keys.first(), min_exclusive) {
        if *first <= min {
            return false;
        }
    }
    if let (Some(last), Some(max)) = (keys.last(), max_exclusive) {
        if *last >= max {
            return false;
        }
    }

    if let Node::Internal(internal) = node {
        if internal.children.len() != num_keys + 1 {
            return false;
        }
        for (i, child) in internal.children.iter().enumerate() {
            let child_min = if i == 0 { min_exclusive } else { Some(keys[i - 1]) };
            let child_max = if i == num_keys {
                max_exclusive
            } else {
                Some(keys[i])
            };
            if !validate_node(child, order, child_min, child_max, false) {
                return false;
            }
        }
    }

    true
}

/// Accumulate `(sum of num_keys, sum of max_keys)` over every reachable
/// node, for `avg_fill_factor = total_keys / total_capacity`.
pub(crate) fn fill_factor_totals(
    node: &Node,
    max_keys: usize,
    total_keys: &mut u64,
    total_capacity: &mut u64,
) {
    *total_keys += node.num_keys() as u64;
    *total_capacity += max_keys as u64;

    if let Node::Internal(internal) = node {
        for child in &internal.children {
            fill_factor_totals(child, max_keys, total_keys, total_capacity);
        }
    }
}

/// Indented pre-order dump: one line per node, `"  "` per depth level,
/// keys in `[a, b, c]`, leaves suffixed with ` (leaf)`.
pub(crate) fn render_node(node: &Node, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push('[');
    for (i, key) in node.keys().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&key.to_string());
    }
    out.push(']');
    if node.is_leaf() {
        out.push_str(" (leaf)");
    }
    out.push('\n');

    if let Node::Internal(internal) = node {
        for child in &internal.children {
            render_node(child, depth + 1, out);
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;
