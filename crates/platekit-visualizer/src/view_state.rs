//! View state for the layout canvas
//!
//! Holds zoom, pan, drag and tooltip state. Every handler returns `true`
//! when the visible frame changed and the canvas must be redrawn.

use crate::draw::{Point, SceneTransform};
use platekit_settings::RenderSettings;

/// Scales are quantized to this many steps per unit so that repeated zoom
/// steps land on the same values as typed literals.
const SCALE_PRECISION: f64 = 1e6;

/// Hover tooltip
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    /// Top-left corner in canvas pixels
    pub position: Point,
}

/// Zoom, pan and pointer state of one canvas
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    scale: f64,
    min_scale: f64,
    max_scale: f64,
    zoom_step: f64,
    offset: Point,
    drag_anchor: Option<Point>,
    tooltip: Tooltip,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_settings(&RenderSettings::default())
    }
}

impl ViewState {
    /// Create a view at `scale`, clamped to `[min_scale, max_scale]`
    pub fn new(scale: f64, min_scale: f64, max_scale: f64, zoom_step: f64) -> Self {
        let mut view = Self {
            scale: min_scale,
            min_scale,
            max_scale,
            zoom_step,
            offset: Point::default(),
            drag_anchor: None,
            tooltip: Tooltip::default(),
        };
        view.set_scale(scale);
        view
    }

    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self::new(
            settings.default_scale,
            settings.min_scale,
            settings.max_scale,
            settings.zoom_step,
        )
    }

    /// Pixels per millimetre
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Pan offset in pixels
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Current content-to-pixel transform
    pub fn transform(&self) -> SceneTransform {
        SceneTransform {
            offset: self.offset,
            scale: self.scale,
        }
    }

    /// Set the scale, quantized and clamped to the allowed range
    pub fn set_scale(&mut self, scale: f64) -> bool {
        if !scale.is_finite() {
            return false;
        }
        let snapped = ((scale * SCALE_PRECISION).round() / SCALE_PRECISION)
            .clamp(self.min_scale, self.max_scale);
        if snapped == self.scale {
            return false;
        }
        tracing::debug!("Zoom {} -> {}", self.scale, snapped);
        self.scale = snapped;
        true
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_scale(self.scale + self.zoom_step)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_scale(self.scale - self.zoom_step)
    }

    /// Start a drag at pixel `p`; the current pan offset is kept
    pub fn pointer_down(&mut self, p: Point) -> bool {
        self.drag_anchor = Some(p - self.offset);
        false
    }

    /// Pan while dragging
    pub fn pointer_move(&mut self, p: Point) -> bool {
        let Some(anchor) = self.drag_anchor else {
            return false;
        };
        let offset = p - anchor;
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        true
    }

    /// End a drag
    pub fn pointer_up(&mut self) -> bool {
        self.drag_anchor = None;
        false
    }

    /// Pointer left the canvas; ends a drag like `pointer_up`
    pub fn pointer_leave(&mut self) -> bool {
        self.pointer_up()
    }

    /// Show `text` with its top-left corner at pixel `position`
    pub fn show_tooltip(&mut self, text: &str, position: Point) -> bool {
        let tooltip = Tooltip {
            visible: true,
            text: text.to_string(),
            position,
        };
        if tooltip == self.tooltip {
            return false;
        }
        self.tooltip = tooltip;
        true
    }

    pub fn hide_tooltip(&mut self) -> bool {
        if !self.tooltip.visible {
            return false;
        }
        self.tooltip.visible = false;
        true
    }
}
