// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry builder: turns (kind, anchor, size) into drawable geometry.
//!
//! Sizes are in meters. Circles hand the radius straight to the renderer's
//! circle primitive; triangle and rectangle vertices are computed in a planar
//! degree space with a fixed linear meters-to-degrees scale. That is a
//! small-angle approximation, not geodesically accurate, and only holds up
//! near the default view's latitude.

use crate::model::{LatLng, ShapeKind};
use kurbo::{Point, Rect, Vec2};

/// Linear scale factor for the planar approximation, degrees per meter
pub const DEGREES_PER_METER: f64 = 0.00018;

/// Drawable geometry for one shape, in the terms the map surface consumes
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    /// Center plus radius in meters
    Circle { center: LatLng, radius: f64 },
    /// Closed polygon through the given vertices
    Polygon { vertices: Vec<LatLng> },
    /// Axis-aligned box between two corners
    Rect { corner1: LatLng, corner2: LatLng },
}

/// Build the geometry for a shape of `kind` anchored at the click point.
///
/// Pure; malformed sizes are rejected upstream before this is reached.
pub fn build(kind: ShapeKind, anchor: LatLng, size: f64) -> ShapeGeometry {
    let d = size * DEGREES_PER_METER;
    let p = anchor.to_plane();
    match kind {
        ShapeKind::Circle => ShapeGeometry::Circle {
            center: anchor,
            radius: size,
        },
        ShapeKind::Triangle => {
            // Apex at the anchor, base edge north of it.
            let base_left = p + Vec2::new(-d, d);
            let base_right = p + Vec2::new(d, d);
            ShapeGeometry::Polygon {
                vertices: vec![
                    anchor,
                    LatLng::from_plane(base_left),
                    LatLng::from_plane(base_right),
                ],
            }
        }
        ShapeKind::Rectangle => {
            // A square of side `size` with the anchor as one corner.
            let bounds = Rect::from_points(p, p + Vec2::new(d, d));
            ShapeGeometry::Rect {
                corner1: LatLng::from_plane(bounds.origin()),
                corner2: LatLng::from_plane(Point::new(bounds.max_x(), bounds.max_y())),
            }
        }
    }
}
