// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for placed shapes.
//!
//! Each `ShapeId` is a monotonically increasing `u64` generated from a global
//! atomic counter. Popup actions and registry lookups are keyed by id, so two
//! shapes of the same kind placed at the same anchor stay independently
//! editable. Ids are never reused within a session, so a removed shape leaves
//! no dangling references.

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a placed shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

static SHAPE_COUNTER: AtomicU64 = AtomicU64::new(1);

impl ShapeId {
    /// Create a new unique shape ID
    pub fn next() -> Self {
        Self(SHAPE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value, for display and frontend lookups
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ShapeId::next();
        let b = ShapeId::next();
        assert_ne!(a, b);
        assert!(b.raw() > a.raw());
    }
}
