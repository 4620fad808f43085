// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Geosketch: place, edit, and remove shape overlays on a map.
//!
//! The core is renderer-agnostic: an [`editing::EditSession`] drives whatever
//! [`map::MapSurface`] and [`host::HostUi`] the frontend injects at
//! construction time. The bundled binary wires those seams to a log-backed
//! surface and the terminal.

pub mod config;
pub mod console;
pub mod editing;
pub mod error;
pub mod geometry;
pub mod host;
pub mod map;
pub mod model;
pub mod theme;
pub mod tools;

use anyhow::Result;
use std::path::Path;

use config::MapConfig;
use console::ConsoleUi;
use editing::EditSession;
use map::HeadlessMap;

/// Config file consulted in the working directory
const CONFIG_PATH: &str = "geosketch.toml";

/// Entry point for the interactive console session
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("geosketch=info".parse().unwrap()),
        )
        .init();

    let config = MapConfig::load_or_default(Path::new(CONFIG_PATH));
    let surface = HeadlessMap::new(&config);
    let mut session = EditSession::new(surface, ConsoleUi, config);
    console::run(&mut session)
}
