// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for shape placement and editing

use crate::model::ShapeId;
use thiserror::Error;

/// A recoverable interaction failure.
///
/// Every variant leaves the session unchanged: no record is created or
/// destroyed on a failing path, and the armed tool is preserved. There are
/// no fatal errors in this system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// A map click arrived while no tool was armed
    #[error("no shape tool selected")]
    NoToolSelected,

    /// Dimension input was cancelled or did not parse as a number
    #[error("invalid dimension input: {input:?}")]
    InvalidDimension {
        /// What the user entered; `None` when the prompt was cancelled
        input: Option<String>,
    },

    /// A popup action referenced a shape that is no longer registered
    #[error("unknown shape {0:?}")]
    UnknownShape(ShapeId),
}
