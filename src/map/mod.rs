// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Map surface collaborator contract.
//!
//! The session never talks to a concrete renderer; it drives drawing, popup
//! binding, and layer removal through [`MapSurface`], which the frontend
//! supplies at construction time. The in-tree implementation is
//! [`HeadlessMap`]; a tile-map widget or wasm binding slots in the same way.

mod headless;
mod popup;

pub use headless::HeadlessMap;
pub use popup::{PopupAction, PopupContent};

use crate::model::LatLng;
use std::sync::atomic::{AtomicU64, Ordering};

// ===== Layer Handle =====

/// Opaque handle to one rendered object on the map surface.
///
/// Minted from a global atomic counter so handles are never reused within a
/// session. Each handle is owned by exactly one shape record and released
/// once, when that record is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(u64);

static LAYER_COUNTER: AtomicU64 = AtomicU64::new(1);

impl LayerId {
    /// Create a new unique layer ID
    pub fn next() -> Self {
        Self(LAYER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value, for logging
    pub fn raw(self) -> u64 {
        self.0
    }
}

// ===== Styling =====

/// Stroke styling for a drawn shape
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    /// CSS color name or hex string, as tile-map renderers expect
    pub color: String,
}

impl PathStyle {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

// ===== Surface Contract =====

/// Drawing and popup primitives supplied by the mapping library.
///
/// All methods are infallible from the caller's perspective; a surface that
/// can fail internally is expected to surface that through its own channels
/// rather than poison the editing state machine.
pub trait MapSurface {
    /// Draw a circle; the radius is in meters
    fn draw_circle(&mut self, center: LatLng, radius_m: f64, style: &PathStyle) -> LayerId;

    /// Draw a closed polygon through `vertices`
    fn draw_polygon(&mut self, vertices: &[LatLng], style: &PathStyle) -> LayerId;

    /// Draw an axis-aligned rectangle between two corners
    fn draw_rectangle(&mut self, corner1: LatLng, corner2: LatLng, style: &PathStyle) -> LayerId;

    /// Attach popup content to a drawn layer
    fn bind_popup(&mut self, layer: LayerId, content: &PopupContent);

    /// Open the popup bound to `layer`, if any
    fn open_popup(&mut self, layer: LayerId);

    /// Detach and discard a drawn layer
    fn remove_layer(&mut self, layer: LayerId);
}
