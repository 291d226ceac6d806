// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end correctness tests against the public `reedkv` surface only
//! (no access to internal node/split machinery) — covering empty-tree
//! queries, balanced builds, sequential growth, upserts, large fanout,
//! and statistics wiring.

use reedkv::btree::{Order, Tree};

fn tree(order: u16) -> Tree {
    Tree::create(Order::new(order).unwrap()).unwrap()
}

// ============================================================================
// Empty tree
// ============================================================================

#[test]
fn test_empty_tree_queries() {
    let mut t = tree(128);

    assert_eq!(t.search(1), (false, None));
    assert!(!t.contains(1));
    assert!(!t.delete(1));
    assert_eq!(t.size(), 0);
    assert_eq!(t.height(), 1);
    assert!(t.validate());

    let mut cursor = t.cursor();
    cursor.first();
    assert!(!cursor.is_valid());
    assert_eq!(cursor.get(), None);
}

// ============================================================================
// Balanced build, small order
// ============================================================================

#[test]
fn test_seven_key_balanced_build_order_four() {
    let mut t = tree(4);
    for key in [40, 20, 60, 10, 30, 50, 70] {
        t.insert(key, key as usize).unwrap();
    }

    assert!(t.validate());
    assert_eq!(t.size(), 7);

    // 40 is the tree's root separator, promoted there by the first split;
    // it is found but carries no value at that position.
    for key in [40, 20, 60, 10, 30, 50, 70] {
        let expected = if key == 40 {
            (true, None)
        } else {
            (true, Some(key as usize))
        };
        assert_eq!(t.search(key), expected);
    }

    let mut cursor = t.cursor();
    cursor.first();
    let mut seen = Vec::new();
    while cursor.is_valid() {
        seen.push(cursor.get().unwrap().0);
        if !cursor.next() {
            break;
        }
    }
    assert_eq!(seen, vec![10, 20, 30, 40, 50, 60, 70]);
}

// ============================================================================
// Sequential growth
// ============================================================================

#[test]
fn test_sequential_one_to_hundred_order_eight() {
    let mut t = tree(8);
    for key in 1..=100i64 {
        t.insert(key, key as usize).unwrap();
    }

    assert!(t.validate());
    assert_eq!(t.size(), 100);

    // Keys promoted to internal separators along the way are found but
    // valueless there, so only existence is checked here.
    for key in 1..=100i64 {
        let (found, _) = t.search(key);
        assert!(found, "missing key {key}");
    }
    assert_eq!(t.search(0), (false, None));
    assert_eq!(t.search(101), (false, None));

    let mut cursor = t.cursor();
    cursor.first();
    let mut count = 0u64;
    let mut previous: Option<i64> = None;
    while cursor.is_valid() {
        let (key, _) = cursor.get().unwrap();
        if let Some(prev) = previous {
            assert!(key > prev, "cursor must visit keys in strictly ascending order");
        }
        previous = Some(key);
        count += 1;
        if !cursor.next() {
            break;
        }
    }
    assert_eq!(count, 100);
}

// ============================================================================
// Upsert semantics
// ============================================================================

#[test]
fn test_upsert_order_four() {
    let mut t = tree(4);
    t.insert(1, 100).unwrap();
    t.insert(2, 200).unwrap();
    t.insert(1, 999).unwrap();

    assert_eq!(t.size(), 2);
    assert_eq!(t.search(1), (true, Some(999)));
    assert_eq!(t.search(2), (true, Some(200)));
}

// ============================================================================
// Large order keeps height bounded
// ============================================================================

#[test]
fn test_large_order_height_bound_order_256() {
    let mut t = tree(256);
    for key in 0..10_000i64 {
        t.insert(key, key as usize).unwrap();
    }

    assert!(t.validate());
    assert_eq!(t.size(), 10_000);
    assert!(t.height() <= 3, "height = {}", t.height());
}

// ============================================================================
// Statistics wiring
// ============================================================================

#[test]
fn test_statistics_wiring_order_sixteen() {
    let mut t = tree(16);
    for key in 0..200i64 {
        t.insert(key, key as usize).unwrap();
    }

    let before = t.stats();
    assert!(before.comparisons > 0);
    assert!(before.node_visits > 0);
    assert_eq!(before.insert_ops, 200);
    assert_eq!(before.merges, 0);

    for key in 0..50i64 {
        t.search(key);
    }
    let after = t.stats();
    assert_eq!(after.search_ops, 50);
    assert!(after.comparisons > before.comparisons);

    t.stats_reset();
    let reset = t.stats();
    assert_eq!(reset.search_ops, 0);
    assert_eq!(reset.node_count, after.node_count);
    assert_eq!(reset.height, after.height);
}

// ============================================================================
// Degenerate delete
// ============================================================================

#[test]
fn test_delete_does_not_remove_the_key() {
    let mut t = tree(4);
    for key in 1..=10i64 {
        t.insert(key, key as usize).unwrap();
    }

    assert!(t.delete(5));
    assert_eq!(t.size(), 9);
    // The key is still physically present and still searchable.
    assert_eq!(t.search(5), (true, Some(5)));
    assert!(t.validate());
}
