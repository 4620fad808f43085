// Copyright 2026 the Geosketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - owns the registry, tool state, and both collaborators.
//!
//! All user interaction funnels through one `EditSession`: tool buttons call
//! [`EditSession::select_tool`], map clicks call [`EditSession::map_click`],
//! and popup buttons call [`EditSession::popup_action`]. Each call runs to
//! completion before the next event is handled, which is the only
//! serialization this single-threaded state machine needs. The session never
//! terminates; every failure path returns it to the idle/armed state awaiting
//! the next event.

use crate::config::MapConfig;
use crate::error::EditError;
use crate::geometry::{self, ShapeGeometry};
use crate::host::HostUi;
use crate::map::{MapSurface, PathStyle, PopupAction, PopupContent};
use crate::model::{LatLng, ShapeId, ShapeKind, ShapeRecord, ShapeRegistry};
use crate::tools::ActiveTool;

/// Message shown when a dimension is requested
const DIMENSION_PROMPT: &str = "Enter dimension in meters:";

/// Notice shown when dimension input is rejected
const INVALID_DIMENSION_NOTICE: &str = "Invalid dimension entered.";

/// The interaction controller: tool state plus registry plus collaborators
pub struct EditSession<S: MapSurface, U: HostUi> {
    surface: S,
    ui: U,
    config: MapConfig,
    registry: ShapeRegistry,
    tool: ActiveTool,
}

impl<S: MapSurface, U: HostUi> EditSession<S, U> {
    pub fn new(surface: S, ui: U, config: MapConfig) -> Self {
        Self {
            surface,
            ui,
            config,
            registry: ShapeRegistry::new(),
            tool: ActiveTool::new(),
        }
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn active_tool(&self) -> Option<ShapeKind> {
        self.tool.current()
    }

    /// Arm a shape tool for subsequent map clicks
    pub fn select_tool(&mut self, kind: ShapeKind) {
        tracing::debug!(tool = %kind, "tool selected");
        self.tool.select(kind);
    }

    /// Disarm the tool, returning to the idle state
    pub fn clear_tool(&mut self) {
        tracing::debug!("tool cleared");
        self.tool.clear();
    }

    /// Handle a click on the map surface.
    ///
    /// With a tool armed, prompts for a dimension and places a new shape at
    /// the click point, returning its id. With no tool armed the click is
    /// ignored. Rejected input leaves the tool armed for a retry.
    pub fn map_click(&mut self, at: LatLng) -> Result<ShapeId, EditError> {
        let Some(kind) = self.tool.current() else {
            tracing::info!(%at, "map click ignored: no shape tool selected");
            return Err(EditError::NoToolSelected);
        };
        let size = self.request_dimension()?;
        Ok(self.place(kind, at, size))
    }

    /// Re-prompt for a dimension and replace the shape with a resized copy.
    ///
    /// The replacement keeps the old kind and anchor but gets a fresh id and
    /// layer; the old layer is released. The prompt happens before anything
    /// is touched, so a rejected or cancelled prompt leaves the shape as it
    /// was.
    pub fn edit_shape(&mut self, id: ShapeId) -> Result<ShapeId, EditError> {
        let record = self
            .registry
            .get(id)
            .cloned()
            .ok_or(EditError::UnknownShape(id))?;
        let size = self.request_dimension()?;
        self.registry.remove(id, &mut self.surface);
        Ok(self.place(record.kind, record.anchor, size))
    }

    /// Remove the shape and release its rendered layer
    pub fn remove_shape(&mut self, id: ShapeId) -> Result<(), EditError> {
        self.registry
            .remove(id, &mut self.surface)
            .map(|_| ())
            .ok_or(EditError::UnknownShape(id))
    }

    /// Dispatch a popup button press
    pub fn popup_action(&mut self, action: PopupAction) -> Result<(), EditError> {
        match action {
            PopupAction::Edit(id) => self.edit_shape(id).map(|_| ()),
            PopupAction::Remove(id) => self.remove_shape(id),
        }
    }

    /// Block on the host UI for a dimension in meters.
    ///
    /// Cancellation and input that does not parse as a number are rejected
    /// the same way: a notice to the user and `InvalidDimension`. Sizes are
    /// not otherwise validated; zero or negative values draw whatever the
    /// surface draws for them.
    fn request_dimension(&mut self) -> Result<f64, EditError> {
        let default = self.config.default_dimension.to_string();
        let input = self.ui.prompt_text(DIMENSION_PROMPT, &default);
        let dimension = input
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|d| !d.is_nan());
        match dimension {
            Some(dimension) => Ok(dimension),
            None => {
                tracing::debug!(?input, "dimension input rejected");
                self.ui.alert(INVALID_DIMENSION_NOTICE);
                Err(EditError::InvalidDimension { input })
            }
        }
    }

    /// Draw a shape, register it, and open its popup
    fn place(&mut self, kind: ShapeKind, anchor: LatLng, size: f64) -> ShapeId {
        let style = PathStyle::new(self.config.colors.for_kind(kind));
        let layer = match geometry::build(kind, anchor, size) {
            ShapeGeometry::Circle { center, radius } => {
                self.surface.draw_circle(center, radius, &style)
            }
            ShapeGeometry::Polygon { vertices } => self.surface.draw_polygon(&vertices, &style),
            ShapeGeometry::Rect { corner1, corner2 } => {
                self.surface.draw_rectangle(corner1, corner2, &style)
            }
        };

        let record = ShapeRecord {
            id: ShapeId::next(),
            kind,
            anchor,
            size,
            layer,
        };
        let popup = PopupContent::for_record(&record);
        self.surface.bind_popup(layer, &popup);
        self.surface.open_popup(layer);

        let id = record.id;
        tracing::debug!(shape = id.raw(), %kind, %anchor, size, "placed shape");
        self.registry.insert(record);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::HeadlessMap;
    use std::collections::VecDeque;

    /// Host UI that replays scripted prompt answers and records everything
    #[derive(Debug, Default)]
    struct ScriptedUi {
        answers: VecDeque<Option<String>>,
        prompts: Vec<(String, String)>,
        alerts: Vec<String>,
    }

    impl ScriptedUi {
        fn answering<I>(answers: I) -> Self
        where
            I: IntoIterator<Item = Option<&'static str>>,
        {
            Self {
                answers: answers
                    .into_iter()
                    .map(|a| a.map(str::to_owned))
                    .collect(),
                ..Self::default()
            }
        }
    }

    impl HostUi for ScriptedUi {
        fn prompt_text(&mut self, message: &str, default: &str) -> Option<String> {
            self.prompts.push((message.to_owned(), default.to_owned()));
            self.answers.pop_front().unwrap_or(None)
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_owned());
        }
    }

    fn session(
        answers: impl IntoIterator<Item = Option<&'static str>>,
    ) -> EditSession<HeadlessMap, ScriptedUi> {
        EditSession::new(
            HeadlessMap::default(),
            ScriptedUi::answering(answers),
            MapConfig::default(),
        )
    }

    const ANCHOR: LatLng = LatLng {
        lat: 11.0168,
        lng: 76.9558,
    };

    #[test]
    fn click_without_tool_creates_nothing() {
        let mut session = session([Some("200")]);
        let result = session.map_click(ANCHOR);

        assert_eq!(result, Err(EditError::NoToolSelected));
        assert!(session.registry.is_empty());
        // The dimension prompt must not even have been shown.
        assert!(session.ui.prompts.is_empty());
    }

    #[test]
    fn place_circle_scenario() {
        let mut session = session([Some("200")]);
        session.select_tool(ShapeKind::Circle);
        let id = session.map_click(ANCHOR).unwrap();

        assert_eq!(session.registry.len(), 1);
        let record = session.registry.get(id).unwrap();
        assert_eq!(record.kind, ShapeKind::Circle);
        assert_eq!(record.anchor, ANCHOR);
        assert_eq!(record.size, 200.0);
        assert!(session.surface.is_live(record.layer));
    }

    #[test]
    fn prompt_offers_configured_default() {
        let mut session = session([Some("200")]);
        session.select_tool(ShapeKind::Circle);
        session.map_click(ANCHOR).unwrap();

        assert_eq!(
            session.ui.prompts,
            vec![("Enter dimension in meters:".to_owned(), "200".to_owned())]
        );
    }

    #[test]
    fn place_then_remove_restores_registry() {
        let mut session = session([Some("200")]);
        session.select_tool(ShapeKind::Triangle);
        let id = session.map_click(ANCHOR).unwrap();
        let layer = session.registry.get(id).unwrap().layer;

        session.remove_shape(id).unwrap();

        assert!(session.registry.is_empty());
        assert_eq!(session.surface.live_layers(), 0);
        assert!(!session.surface.is_live(layer));
        assert_eq!(session.surface.stray_removals(), 0);
    }

    #[test]
    fn invalid_dimension_keeps_tool_armed() {
        let mut session = session([Some("abc")]);
        session.select_tool(ShapeKind::Circle);
        let result = session.map_click(ANCHOR);

        assert_eq!(
            result,
            Err(EditError::InvalidDimension {
                input: Some("abc".to_owned())
            })
        );
        assert!(session.registry.is_empty());
        assert_eq!(session.surface.live_layers(), 0);
        assert_eq!(session.active_tool(), Some(ShapeKind::Circle));
        assert_eq!(session.ui.alerts, vec!["Invalid dimension entered."]);
    }

    #[test]
    fn cancelled_prompt_is_rejected() {
        let mut session = session([None]);
        session.select_tool(ShapeKind::Rectangle);
        let result = session.map_click(ANCHOR);

        assert_eq!(result, Err(EditError::InvalidDimension { input: None }));
        assert!(session.registry.is_empty());
        assert_eq!(session.active_tool(), Some(ShapeKind::Rectangle));
    }

    #[test]
    fn nan_input_is_rejected() {
        let mut session = session([Some("NaN")]);
        session.select_tool(ShapeKind::Circle);
        assert!(matches!(
            session.map_click(ANCHOR),
            Err(EditError::InvalidDimension { .. })
        ));
        assert!(session.registry.is_empty());
    }

    #[test]
    fn same_anchor_different_kinds_coexist() {
        let mut session = session([Some("200"), Some("50")]);
        session.select_tool(ShapeKind::Circle);
        session.map_click(ANCHOR).unwrap();
        session.select_tool(ShapeKind::Rectangle);
        session.map_click(ANCHOR).unwrap();

        assert_eq!(session.registry.len(), 2);
        assert_eq!(session.registry.find_at(ShapeKind::Circle, ANCHOR).len(), 1);
        assert_eq!(
            session
                .registry
                .find_at(ShapeKind::Rectangle, ANCHOR)
                .len(),
            1
        );
    }

    #[test]
    fn edit_replaces_size_and_releases_old_layer() {
        let mut session = session([Some("200"), Some("50"), Some("75")]);
        session.select_tool(ShapeKind::Circle);
        session.map_click(ANCHOR).unwrap();
        session.select_tool(ShapeKind::Rectangle);
        let rect_id = session.map_click(ANCHOR).unwrap();
        let old_layer = session.registry.get(rect_id).unwrap().layer;

        let new_id = session.edit_shape(rect_id).unwrap();

        assert_eq!(session.registry.len(), 2);
        assert_ne!(new_id, rect_id);
        let record = session.registry.get(new_id).unwrap();
        assert_eq!(record.kind, ShapeKind::Rectangle);
        assert_eq!(record.anchor, ANCHOR);
        assert_eq!(record.size, 75.0);
        assert!(!session.surface.is_live(old_layer));
        assert!(session.surface.is_live(record.layer));
        // The old handle was released exactly once.
        assert_eq!(session.surface.stray_removals(), 0);
    }

    #[test]
    fn rejected_edit_leaves_shape_untouched() {
        let mut session = session([Some("200"), None]);
        session.select_tool(ShapeKind::Circle);
        let id = session.map_click(ANCHOR).unwrap();
        let layer = session.registry.get(id).unwrap().layer;

        let result = session.edit_shape(id);

        assert_eq!(result, Err(EditError::InvalidDimension { input: None }));
        assert_eq!(session.registry.len(), 1);
        assert_eq!(session.registry.get(id).unwrap().size, 200.0);
        assert!(session.surface.is_live(layer));
    }

    #[test]
    fn remove_circle_leaves_rectangle() {
        let mut session = session([Some("200"), Some("50")]);
        session.select_tool(ShapeKind::Circle);
        let circle_id = session.map_click(ANCHOR).unwrap();
        session.select_tool(ShapeKind::Rectangle);
        let rect_id = session.map_click(ANCHOR).unwrap();

        session.remove_shape(circle_id).unwrap();

        assert_eq!(session.registry.len(), 1);
        assert_eq!(
            session.registry.get(rect_id).map(|r| r.kind),
            Some(ShapeKind::Rectangle)
        );
        assert_eq!(session.surface.live_layers(), 1);
    }

    #[test]
    fn stale_id_is_an_unknown_shape() {
        let mut session = session([Some("200")]);
        session.select_tool(ShapeKind::Circle);
        let id = session.map_click(ANCHOR).unwrap();

        session.remove_shape(id).unwrap();
        assert_eq!(session.remove_shape(id), Err(EditError::UnknownShape(id)));
        assert_eq!(session.edit_shape(id), Err(EditError::UnknownShape(id)));
        assert_eq!(session.surface.stray_removals(), 0);
    }

    #[test]
    fn popup_actions_dispatch() {
        let mut session = session([Some("200"), Some("75")]);
        session.select_tool(ShapeKind::Circle);
        let id = session.map_click(ANCHOR).unwrap();

        session.popup_action(PopupAction::Edit(id)).unwrap();
        assert_eq!(session.registry.len(), 1);
        let record = session.registry.iter().next().unwrap();
        assert_eq!(record.size, 75.0);

        let id = record.id;
        session.popup_action(PopupAction::Remove(id)).unwrap();
        assert!(session.registry.is_empty());
    }
}
