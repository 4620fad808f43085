// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Core data model: ids, value types, and the shape registry

mod record;
mod registry;
mod shape_id;

pub use record::{LatLng, ShapeKind, ShapeRecord};
pub use registry::ShapeRegistry;
pub use shape_id::ShapeId;
