// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Surface implementation that renders to the log instead of a map widget.
//!
//! `HeadlessMap` tracks every layer it has drawn and which of them are still
//! live, logs draw/remove operations, and prints popups when they open. The
//! console frontend runs on it, and tests use it to assert that removal
//! actually releases render handles.

use crate::config::MapConfig;
use crate::map::{LayerId, MapSurface, PathStyle, PopupContent};
use crate::model::LatLng;
use std::collections::{BTreeMap, BTreeSet};

/// A recording, log-backed map surface
#[derive(Debug, Default)]
pub struct HeadlessMap {
    live: BTreeSet<LayerId>,
    popups: BTreeMap<LayerId, PopupContent>,
    /// Calls to `remove_layer` with a handle that was not live
    stray_removals: u64,
}

impl HeadlessMap {
    /// Create the surface, logging the initial view and tile layer
    pub fn new(config: &MapConfig) -> Self {
        tracing::info!(
            center = %config.center,
            zoom = config.zoom,
            "map initialized"
        );
        tracing::info!(url = %config.tile_url, attribution = %config.attribution, "tile layer added");
        Self::default()
    }

    /// Number of layers currently drawn
    pub fn live_layers(&self) -> usize {
        self.live.len()
    }

    /// Whether `layer` is still drawn
    pub fn is_live(&self, layer: LayerId) -> bool {
        self.live.contains(&layer)
    }

    /// How many times a dead or unknown handle was released.
    ///
    /// Always zero when every handle is released exactly once.
    pub fn stray_removals(&self) -> u64 {
        self.stray_removals
    }

    fn register(&mut self, layer: LayerId) -> LayerId {
        self.live.insert(layer);
        layer
    }
}

impl MapSurface for HeadlessMap {
    fn draw_circle(&mut self, center: LatLng, radius_m: f64, style: &PathStyle) -> LayerId {
        let layer = LayerId::next();
        tracing::debug!(
            layer = layer.raw(),
            %center,
            radius_m,
            color = %style.color,
            "drew circle"
        );
        self.register(layer)
    }

    fn draw_polygon(&mut self, vertices: &[LatLng], style: &PathStyle) -> LayerId {
        let layer = LayerId::next();
        tracing::debug!(
            layer = layer.raw(),
            vertices = vertices.len(),
            color = %style.color,
            "drew polygon"
        );
        self.register(layer)
    }

    fn draw_rectangle(&mut self, corner1: LatLng, corner2: LatLng, style: &PathStyle) -> LayerId {
        let layer = LayerId::next();
        tracing::debug!(
            layer = layer.raw(),
            %corner1,
            %corner2,
            color = %style.color,
            "drew rectangle"
        );
        self.register(layer)
    }

    fn bind_popup(&mut self, layer: LayerId, content: &PopupContent) {
        self.popups.insert(layer, content.clone());
    }

    fn open_popup(&mut self, layer: LayerId) {
        // The popup is user-facing output, not diagnostics.
        if let Some(content) = self.popups.get(&layer) {
            println!("{content}");
        }
    }

    fn remove_layer(&mut self, layer: LayerId) {
        if self.live.remove(&layer) {
            self.popups.remove(&layer);
            tracing::debug!(layer = layer.raw(), "removed layer");
        } else {
            self.stray_removals += 1;
            tracing::warn!(layer = layer.raw(), "release of a dead layer handle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_and_remove_track_liveness() {
        let mut map = HeadlessMap::default();
        let style = PathStyle::new("green");
        let layer = map.draw_circle(LatLng::new(11.0, 76.0), 200.0, &style);

        assert!(map.is_live(layer));
        assert_eq!(map.live_layers(), 1);

        map.remove_layer(layer);
        assert!(!map.is_live(layer));
        assert_eq!(map.live_layers(), 0);
        assert_eq!(map.stray_removals(), 0);
    }

    #[test]
    fn double_release_is_counted() {
        let mut map = HeadlessMap::default();
        let style = PathStyle::new("blue");
        let layer = map.draw_rectangle(LatLng::new(1.0, 2.0), LatLng::new(1.1, 2.1), &style);

        map.remove_layer(layer);
        map.remove_layer(layer);
        assert_eq!(map.stray_removals(), 1);
    }
}
