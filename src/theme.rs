// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors
//!
//! Colors are CSS color strings because that is what tile-map renderers
//! take for path styling. Runtime overrides live in the config file; these
//! are the built-in defaults.

use crate::model::ShapeKind;

// ============================================================================
// SHAPE STROKE COLORS
// ============================================================================
pub const CIRCLE_COLOR: &str = "green";
pub const TRIANGLE_COLOR: &str = "red";
pub const RECTANGLE_COLOR: &str = "blue";

/// Built-in stroke color for a shape kind
pub fn default_color(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Circle => CIRCLE_COLOR,
        ShapeKind::Triangle => TRIANGLE_COLOR,
        ShapeKind::Rectangle => RECTANGLE_COLOR,
    }
}
