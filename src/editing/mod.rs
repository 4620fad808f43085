// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Interaction state machine for placing and editing shapes

mod session;

pub use session::EditSession;
