// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

use super::*;
use crate::btree::node::{InternalNode, LeafNode};
use crate::btree::types::Order;

fn leaf(keys: &[Key]) -> Node {
    Node::Leaf(LeafNode {
        keys: keys.to_vec(),
        values: keys.iter().map(|&k| k as usize).collect(),
    })
}

#[test]
fn validate_accepts_single_leaf_root() {
    let order = Order::new(4).unwrap();
    let root = leaf(&[1, 2, 3]);
    assert!(validate_node(&root, order, None, None, true));
}

#[test]
fn validate_rejects_unsorted_keys() {
    let order = Order::new(4).unwrap();
    let root = leaf(&[3, 1, 2]);
    assert!(!validate_node(&root, order, None, None, true));
}

#[test]
fn validate_rejects_non_root_underflow() {
    let order = Order::new(8).unwrap(); // min_keys = 3
    let root = Node::Internal(InternalNode {
        keys: vec![10],
        children: vec![Box::new(leaf(&[1])), Box::new(leaf(&[20]))],
    });
    assert!(!validate_node(&root, order, None, None, true));
}

#[test]
fn validate_checks_separator_bounds_against_children() {
    let order = Order::new(4).unwrap();
    // Separator says 10, but left child holds a key >= 10: invalid.
    let root = Node::Internal(InternalNode {
        keys: vec![10],
        children: vec![Box::new(leaf(&[1, 12])), Box::new(leaf(&[20]))],
    });
    assert!(!validate_node(&root, order, None, None, true));
}

#[test]
fn fill_factor_totals_sum_across_subtree() {
    let root = Node::Internal(InternalNode {
        keys: vec![10],
        children: vec![Box::new(leaf(&[1, 2])), Box::new(leaf(&[20]))],
    });
    let mut total_keys = 0;
    let mut total_capacity = 0;
    fill_factor_totals(&root, 3, &mut total_keys, &mut total_capacity);
    // root (1 key) + left leaf (2 keys) + right leaf (1 key) = 4
    assert_eq!(total_keys, 4);
    // 3 nodes * max_keys(3) = 9
    assert_eq!(total_capacity, 9);
}

#[test]
fn render_indents_by_depth_and_marks_leaves() {
    let root = Node::Internal(InternalNode {
        keys: vec![10],
        children: vec![Box::new(leaf(&[1, 2])), Box::new(leaf(&[20]))],
    });
    let mut out = String::new();
    render_node(&root, 0, &mut out);
    assert_eq!(out, "[10]\n  [1, 2] (leaf)\n  [20] (leaf)\n");
}
