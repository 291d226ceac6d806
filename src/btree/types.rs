// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Core types shared across the B-tree index: the key/value domain and the
//! `Order` (fanout) configuration.

use crate::error::{ReedError, ReedResult};

/// Index key. Signed 64-bit, natural ordering.
pub type Key = i64;

/// Opaque caller-supplied value handle.
///
/// The tree never inspects, dereferences, or frees this — it is stored in
/// leaves and returned verbatim by `get`/`search`. Callers typically stash
/// an array index, a generation counter, or a pointer cast to `usize`.
pub type Value = usize;

/// Minimum legal order: 3 (allows 2-3 children per internal node).
pub const ORDER_MIN: u16 = 3;

/// Maximum legal order, bounding node size.
pub const ORDER_MAX: u16 = 1024;

/// Default order: keeps height <= 3 for realistic key counts while still
/// allowing efficient in-node binary search.
pub const ORDER_DEFAULT: u16 = 128;

/// Validated B-tree order (maximum number of children per node).
///
/// A node holds up to `order - 1` keys; `min_keys = (order - 1) / 2`.
///
/// ## Example
/// ```
/// use reedkv::btree::Order;
///
/// let order = Order::new(128)?;
/// assert_eq!(order.max_keys(), 127);
/// assert_eq!(order.min_keys(), 63);
/// # Ok::<(), reedkv::ReedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order(u16);

impl Order {
    /// Create a new order, validating it is within `[3, 1024]`.
    ///
    /// ## Error Conditions
    /// - `order` outside `[ORDER_MIN, ORDER_MAX]`
    pub fn new(order: u16) -> ReedResult<Self> {
        if !(ORDER_MIN..=ORDER_MAX).contains(&order) {
            return Err(ReedError::InvalidArgument {
                reason: format!(
                    "B-tree order must be in [{ORDER_MIN}, {ORDER_MAX}], got {order}"
                ),
            });
        }
        Ok(Self(order))
    }

    /// Maximum number of keys a node may hold before it must split.
    pub fn max_keys(&self) -> usize {
        (self.0 - 1) as usize
    }

    /// Minimum number of keys a non-root node must hold: `⌊(order-1)/2⌋`.
    pub fn min_keys(&self) -> usize {
        ((self.0 - 1) / 2) as usize
    }

    /// The raw configured order value.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl Default for Order {
    /// The default recommended order (128).
    fn default() -> Self {
        Self(ORDER_DEFAULT)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
