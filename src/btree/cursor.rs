// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! External, position-based iteration over a tree's keys in sorted order.
//!
//! A cursor tracks its position as a stack of `(node, index)` pairs, one
//! per depth level, mirroring the path taken from the root. In-order
//! traversal of a B-tree visits `child[0], key[0], child[1], key[1], ...,
//! key[n-1], child[n]` at every internal node, so a separator key is a
//! real stop on the cursor's path, not just a boundary between leaves:
//! `positions[depth]` at an internal frame doubles as "the child just
//! completed" and "the key now being presented" (the two coincide, since
//! the key to the right of `child[i]` is `key[i]`). Moving forward or
//! backward pops back up this stack until it finds a pending key or child
//! to descend into, rather than walking a separate leaf-sibling chain —
//! this tree keeps no such chain, since nothing but the cursor itself
//! ever needs ordered adjacency.
//!
//! `Cursor<'a>` borrows the tree immutably for its entire lifetime. Every
//! mutating `Tree` method takes `&mut self`, so the borrow checker
//! rejects any attempt to insert, delete, or search through the tree
//! while a cursor derived from it is still alive — the aliasing rule the
//! original C implementation enforced with asserts, the compiler
//! enforces here for free.

use super::node::Node;
use super::search::search_node;
use super::tree::Tree;
use super::types::{Key, Value};

/// A cursor over `Tree`'s keys in ascending order.
pub struct Cursor<'a> {
    tree: &'a Tree,
    path: Vec<&'a Node>,
    positions: Vec<usize>,
    valid: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            path: Vec::new(),
            positions: Vec::new(),
            valid: false,
        }
    }

    /// Position at the smallest key in the tree. Invalid on an empty
    /// tree.
    pub fn first(&mut self) {
        self.path.clear();
        self.positions.clear();
        self.push_leftmost(self.tree.root.as_ref());
        self.valid = self.path.last().unwrap().num_keys() > 0;
    }

    /// Position at the largest key in the tree. Invalid on an empty
    /// tree.
    pub fn last(&mut self) {
        self.path.clear();
        self.positions.clear();
        self.push_rightmost(self.tree.root.as_ref());
        self.valid = self.path.last().unwrap().num_keys() > 0;
    }

    /// Position at `key` if present at any level — leaf or internal
    /// separator — otherwise at the smallest key greater than it.
    /// Invalid if no such key exists.
    pub fn seek(&mut self, key: Key) -> bool {
        self.path.clear();
        self.positions.clear();

        let mut node = self.tree.root.as_ref();
        loop {
            self.path.push(node);
            let result = search_node(node.keys(), key, || {});
            self.positions.push(result.index);

            if result.found {
                self.valid = true;
                return true;
            }

            match node {
                Node::Leaf(leaf) => {
                    if result.index < leaf.keys.len() {
                        self.valid = true;
                        return true;
                    }
                    return self.climb_to_right_pending();
                }
                Node::Internal(internal) => {
                    node = internal.children[result.index].as_ref();
                }
            }
        }
    }

    /// Advance to the next key in ascending order. Returns `false` and
    /// invalidates the cursor once the last key has been passed.
    pub fn next(&mut self) -> bool {
        if !self.valid {
            return false;
        }

        let depth = self.path.len() - 1;
        match self.path[depth] {
            Node::Leaf(leaf) => {
                self.positions[depth] += 1;
                if self.positions[depth] < leaf.keys.len() {
                    return true;
                }
            }
            Node::Internal(internal) => {
                let next_child = self.positions[depth] + 1;
                self.positions[depth] = next_child;
                let child = internal.children[next_child].as_ref();
                self.push_leftmost(child);
                return true;
            }
        }

        self.climb_to_right_pending()
    }

    /// Retreat to the previous key in ascending order. Returns `false`
    /// and invalidates the cursor once the first key has been passed.
    pub fn prev(&mut self) -> bool {
        if !self.valid {
            return false;
        }

        let depth = self.path.len() - 1;
        match self.path[depth] {
            Node::Leaf(_) => {
                if self.positions[depth] > 0 {
                    self.positions[depth] -= 1;
                    return true;
                }
            }
            Node::Internal(internal) => {
                let child = internal.children[self.positions[depth]].as_ref();
                self.push_rightmost(child);
                return true;
            }
        }

        self.climb_to_left_pending()
    }

    /// The key (and, for a leaf position, the value) the cursor
    /// currently points at. `None` if the cursor is not positioned. At
    /// an internal separator the value is always `None`.
    pub fn get(&self) -> Option<(Key, Option<Value>)> {
        if !self.valid {
            return None;
        }
        let depth = self.positions.len() - 1;
        let node = self.path[depth];
        let pos = self.positions[depth];

        let key = node.keys()[pos];
        let value = match node {
            Node::Leaf(leaf) => Some(leaf.values[pos]),
            Node::Internal(_) => None,
        };
        Some((key, value))
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Pop frames that have no key to their right, one level at a time,
    /// until a frame with a pending key surfaces or the path empties.
    fn climb_to_right_pending(&mut self) -> bool {
        loop {
            self.path.pop();
            self.positions.pop();
            if self.path.is_empty() {
                self.valid = false;
                return false;
            }
            let depth = self.path.len() - 1;
            let exhausted = match self.path[depth] {
                Node::Leaf(leaf) => self.positions[depth] >= leaf.keys.len(),
                Node::Internal(internal) => self.positions[depth] >= internal.keys.len(),
            };
            if !exhausted {
                self.valid = true;
                return true;
            }
        }
    }

    /// Pop frames that have no key to their left, one level at a time,
    /// until a frame with a pending key surfaces or the path empties.
    fn climb_to_left_pending(&mut self) -> bool {
        loop {
            self.path.pop();
            self.positions.pop();
            if self.path.is_empty() {
                self.valid = false;
                return false;
            }
            let depth = self.path.len() - 1;
            let pos = self.positions[depth];
            if pos == 0 {
                continue;
            }
            self.positions[depth] = pos - 1;
            self.valid = true;
            return true;
        }
    }

    /// Push `node` and every leftmost descendant down to its leaf. An
    /// internal frame's position starts at 0: child 0 is about to be
    /// explored, and key 0 is the pending separator once it completes.
    fn push_leftmost(&mut self, mut node: &'a Node) {
        loop {
            self.path.push(node);
            self.positions.push(0);
            match node {
                Node::Leaf(_) => break,
                Node::Internal(internal) => node = internal.children[0].as_ref(),
            }
        }
    }

    /// Push `node` and every rightmost descendant down to its leaf. An
    /// internal frame's position starts at `num_keys` (its last child);
    /// there is no separator pending to the right of the last child.
    fn push_rightmost(&mut self, mut node: &'a Node) {
        loop {
            match node {
                Node::Internal(internal) => {
                    let last_child = internal.keys.len();
                    self.path.push(node);
                    self.positions.push(last_child);
                    node = internal.children[last_child].as_ref();
                }
                Node::Leaf(leaf) => {
                    self.path.push(node);
                    self.positions.push(leaf.keys.len().saturating_sub(1));
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
