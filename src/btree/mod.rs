// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! An in-memory, ordered B-tree index over signed 64-bit keys.
//!
//! ```
//! use reedkv::btree::{Order, Tree};
//!
//! let mut tree = Tree::create(Order::new(4)?)?;
//! tree.insert(10, 100)?;
//! tree.insert(20, 200)?;
//! assert_eq!(tree.search(10), (true, Some(100)));
//!
//! let mut cursor = tree.cursor();
//! cursor.first();
//! assert_eq!(cursor.get(), Some((10, Some(100))));
//! # Ok::<(), reedkv::ReedError>(())
//! ```

mod cursor;
mod diagnostics;
mod node;
mod search;
mod stats;
mod tree;
mod types;

pub use cursor::Cursor;
pub use stats::Stats;
pub use tree::Tree;
pub use types::{Key, Order, Value, ORDER_DEFAULT, ORDER_MAX, ORDER_MIN};
