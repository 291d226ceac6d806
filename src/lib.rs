// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! reedkv: an in-memory, ordered B-tree index over signed 64-bit keys.
//!
//! The core type is [`btree::Tree`]: configurable fanout, point
//! insert/upsert/search/delete, an external [`btree::Cursor`] for
//! ordered traversal, and a running [`btree::Stats`] block so callers can
//! quantify the tree's O(log N) behavior against a linear scan (see the
//! `reedkv-bench` binary).
//!
//! Persistence, concurrency, transactions, and full rebalancing delete
//! are explicitly out of scope — this crate models the in-memory index
//! structure only.

pub mod btree;
pub mod error;

pub use btree::{Cursor, Key, Order, Stats, Tree, Value};
pub use error::{ReedError, ReedResult};
