// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Core value types: coordinates, shape kinds, and placed-shape records.

use crate::map::LayerId;
use crate::model::ShapeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

// ===== Coordinates =====

/// A geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Project into the planar degree space used for vertex math (x = lng, y = lat).
    ///
    /// This is a small-angle approximation; it is only used for offsets of a
    /// few hundred meters around the click point, never for real projection.
    pub fn to_plane(self) -> Point {
        Point::new(self.lng, self.lat)
    }

    /// Inverse of [`LatLng::to_plane`]
    pub fn from_plane(p: Point) -> Self {
        Self {
            lat: p.y,
            lng: p.x,
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

// ===== Shape Kind =====

/// Kind of shape placed on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Circle around the click point
    Circle,
    /// Triangle with its apex at the click point
    Triangle,
    /// Axis-aligned square anchored at the click point
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Rectangle];

    /// Lowercase name, matching tool-button identifiers
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
        }
    }

    /// What the size scalar means for this kind, as shown in popups
    pub fn dimension_label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "RADIUS",
            ShapeKind::Triangle | ShapeKind::Rectangle => "SIDE LENGTH",
        }
    }

    /// Parse a tool-button identifier (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "circle" => Some(ShapeKind::Circle),
            "triangle" => Some(ShapeKind::Triangle),
            "rectangle" => Some(ShapeKind::Rectangle),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ===== Shape Record =====

/// A placed shape: identity, geometry parameters, and the rendered layer it owns.
///
/// Records are immutable once placed; editing replaces the whole record with
/// one that reuses the kind and anchor. The `layer` handle is owned
/// exclusively by this record and released when the record is destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// The click point; center for circles, apex/corner for the others
    pub anchor: LatLng,
    /// Radius for circles, side length otherwise, in meters
    pub size: f64,
    pub layer: LayerId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_round_trip() {
        let at = LatLng::new(11.0168, 76.9558);
        assert_eq!(LatLng::from_plane(at.to_plane()), at);
        assert_eq!(at.to_plane(), Point::new(76.9558, 11.0168));
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::parse(kind.name()), Some(kind));
        }
        assert_eq!(ShapeKind::parse("Circle"), Some(ShapeKind::Circle));
        assert_eq!(ShapeKind::parse("hexagon"), None);
    }

    #[test]
    fn dimension_labels() {
        assert_eq!(ShapeKind::Circle.dimension_label(), "RADIUS");
        assert_eq!(ShapeKind::Triangle.dimension_label(), "SIDE LENGTH");
        assert_eq!(ShapeKind::Rectangle.dimension_label(), "SIDE LENGTH");
    }
}
