// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Host UI collaborator: modal text input and alert notices.

/// Modal input and notification primitives supplied by the host environment.
///
/// `prompt_text` blocks until the user answers or cancels; no other event is
/// processed while it is pending, and there is no timeout. `None` means the
/// user cancelled, which callers treat exactly like unparsable input.
pub trait HostUi {
    /// Ask the user for a line of text, offering `default` as the
    /// pre-filled answer
    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String>;

    /// Show the user a notice
    fn alert(&mut self, message: &str);
}
