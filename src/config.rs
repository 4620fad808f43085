// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration: initial view, tile layer, and shape styling.
//!
//! Loaded from an optional TOML file. Every field has a built-in default, so
//! a missing file, an empty table, or a partial one all yield a working
//! setup.

use crate::model::{LatLng, ShapeKind};
use crate::theme;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Map and interaction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial zoom level
    pub zoom: u8,
    /// Tile URL template
    pub tile_url: String,
    /// Tile layer attribution
    pub attribution: String,
    /// Default answer offered by the dimension prompt, in meters
    pub default_dimension: f64,
    /// Initial map center
    pub center: LatLng,
    /// Stroke colors per shape kind
    pub colors: ShapeColors,
}

/// Per-kind stroke colors (CSS color names or hex strings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeColors {
    pub circle: String,
    pub triangle: String,
    pub rectangle: String,
}

impl ShapeColors {
    pub fn for_kind(&self, kind: ShapeKind) -> &str {
        match kind {
            ShapeKind::Circle => &self.circle,
            ShapeKind::Triangle => &self.triangle,
            ShapeKind::Rectangle => &self.rectangle,
        }
    }
}

impl Default for ShapeColors {
    fn default() -> Self {
        Self {
            circle: theme::default_color(ShapeKind::Circle).to_owned(),
            triangle: theme::default_color(ShapeKind::Triangle).to_owned(),
            rectangle: theme::default_color(ShapeKind::Rectangle).to_owned(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(11.0168, 76.9558),
            zoom: 5,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_owned(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_owned(),
            default_dimension: 200.0,
            colors: ShapeColors::default(),
        }
    }
}

impl MapConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config at {}", path.display()))
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    ///
    /// A file that exists but fails to load is reported and ignored rather
    /// than aborting the session.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                tracing::warn!("ignoring config: {err:#}");
                Self::default()
            }
        }
    }
}
