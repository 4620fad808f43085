// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Geosketch: place, edit, and remove shape overlays on a map

fn main() -> anyhow::Result<()> {
    geosketch::run()
}
