// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool selection state.
//!
//! One shape tool may be armed at a time. Selecting a tool arms it for
//! subsequent map clicks; it stays armed until replaced or cleared, so a
//! rejected dimension input leaves the user ready to retry the same shape.

use crate::model::ShapeKind;

/// The currently armed shape tool, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveTool {
    current: Option<ShapeKind>,
}

impl ActiveTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a tool, replacing any previously armed one
    pub fn select(&mut self, kind: ShapeKind) {
        self.current = Some(kind);
    }

    /// Return to the idle state
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The armed tool, read once per map click
    pub fn current(&self) -> Option<ShapeKind> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(ActiveTool::new().current(), None);
    }

    #[test]
    fn select_replaces_previous() {
        let mut tool = ActiveTool::new();
        tool.select(ShapeKind::Circle);
        assert_eq!(tool.current(), Some(ShapeKind::Circle));

        tool.select(ShapeKind::Rectangle);
        assert_eq!(tool.current(), Some(ShapeKind::Rectangle));
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut tool = ActiveTool::new();
        tool.select(ShapeKind::Triangle);
        tool.clear();
        assert_eq!(tool.current(), None);
    }
}
