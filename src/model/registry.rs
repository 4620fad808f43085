// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Ordered collection of placed shapes.
//!
//! The registry owns every [`ShapeRecord`] in a session. Removal detaches
//! the record's rendered layer from the map surface before the record is
//! dropped, so a live `LayerId` always belongs to a registered shape.
//! Insertion order is preserved but carries no meaning.

use crate::map::MapSurface;
use crate::model::{LatLng, ShapeId, ShapeKind, ShapeRecord};

/// All shapes currently placed on the map
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: Vec<ShapeRecord>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeRecord> {
        self.shapes.iter()
    }

    /// Append a record
    pub fn insert(&mut self, record: ShapeRecord) {
        self.shapes.push(record);
    }

    /// Look a record up by id
    pub fn get(&self, id: ShapeId) -> Option<&ShapeRecord> {
        self.shapes.iter().find(|record| record.id == id)
    }

    /// All records matching both kind and anchor.
    ///
    /// Anchors compare by exact float equality: placements are keyed by the
    /// click coordinates, which are reused verbatim on edit.
    pub fn find_at(&self, kind: ShapeKind, anchor: LatLng) -> Vec<&ShapeRecord> {
        self.shapes
            .iter()
            .filter(|record| record.kind == kind && record.anchor == anchor)
            .collect()
    }

    /// Remove the record with `id`, detaching its layer from the surface.
    ///
    /// Returns the removed record, or `None` if the id is not registered.
    pub fn remove(&mut self, id: ShapeId, surface: &mut dyn MapSurface) -> Option<ShapeRecord> {
        let index = self.shapes.iter().position(|record| record.id == id)?;
        let record = self.shapes.remove(index);
        surface.remove_layer(record.layer);
        tracing::debug!(shape = record.id.raw(), kind = %record.kind, "removed shape");
        Some(record)
    }

    /// Remove every record matching (kind, anchor), detaching each layer.
    ///
    /// Returns the number of records removed; removing nothing is a no-op,
    /// not an error.
    pub fn remove_at(
        &mut self,
        kind: ShapeKind,
        anchor: LatLng,
        surface: &mut dyn MapSurface,
    ) -> usize {
        let mut removed = 0;
        self.shapes.retain(|record| {
            if record.kind == kind && record.anchor == anchor {
                surface.remove_layer(record.layer);
                removed += 1;
                false
            } else {
                true
            }
        });
        if removed > 0 {
            tracing::debug!(%kind, %anchor, removed, "removed shapes at anchor");
        }
        removed
    }
}
