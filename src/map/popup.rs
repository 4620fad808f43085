// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Structured popup content for placed shapes.
//!
//! A popup describes the shape it is attached to and carries that shape's
//! id. Frontends render the text and wire their edit/remove affordances back
//! to the session as a [`PopupAction`], so no action ever has to reconstruct
//! which shape it belongs to from coordinates.

use crate::model::{LatLng, ShapeId, ShapeKind, ShapeRecord};
use std::fmt;

/// Information popup attached to a drawn shape
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    /// The shape this popup belongs to; edit/remove actions carry this id
    pub shape: ShapeId,
    pub kind: ShapeKind,
    pub anchor: LatLng,
    pub size: f64,
}

impl PopupContent {
    pub fn for_record(record: &ShapeRecord) -> Self {
        Self {
            shape: record.id,
            kind: record.kind,
            anchor: record.anchor,
            size: record.size,
        }
    }
}

impl fmt::Display for PopupContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} INFORMATION", self.kind.name().to_ascii_uppercase())?;
        writeln!(f, "COORD: {:.4}, {:.4}", self.anchor.lat, self.anchor.lng)?;
        write!(f, "{}: {} M", self.kind.dimension_label(), self.size)
    }
}

/// A popup button press, routed back to the session by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupAction {
    /// Re-prompt for a dimension and replace the shape
    Edit(ShapeId),
    /// Remove the shape and its rendered layer
    Remove(ShapeId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::LayerId;

    #[test]
    fn display_text_for_circle() {
        let record = ShapeRecord {
            id: ShapeId::next(),
            kind: ShapeKind::Circle,
            anchor: LatLng::new(11.0168, 76.9558),
            size: 200.0,
            layer: LayerId::next(),
        };
        let popup = PopupContent::for_record(&record);
        assert_eq!(
            popup.to_string(),
            "CIRCLE INFORMATION\nCOORD: 11.0168, 76.9558\nRADIUS: 200 M"
        );
    }

    #[test]
    fn display_rounds_coordinates() {
        let record = ShapeRecord {
            id: ShapeId::next(),
            kind: ShapeKind::Rectangle,
            anchor: LatLng::new(12.345678, -76.987654),
            size: 50.0,
            layer: LayerId::next(),
        };
        let popup = PopupContent::for_record(&record);
        assert_eq!(
            popup.to_string(),
            "RECTANGLE INFORMATION\nCOORD: 12.3457, -76.9877\nSIDE LENGTH: 50 M"
        );
    }
}
