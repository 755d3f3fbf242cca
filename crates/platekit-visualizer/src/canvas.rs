//! Interactive layout canvas
//!
//! Owns the layout being shown, the view state and the render settings.
//! Input handlers update the view and mark the canvas dirty; `render`
//! rebuilds the whole frame.

use crate::draw::{Point, Scene};
use crate::hit_test::{offcut_hit_region, tooltip_position, HitRegion, OFFCUT_TOOLTIP};
use crate::plate_renderer::{render_empty, render_for_export, render_layout};
use crate::view_state::ViewState;
use platekit_layout::PlateLayout;
use platekit_settings::RenderSettings;

#[derive(Debug, Clone)]
pub struct LayoutCanvas {
    settings: RenderSettings,
    view: ViewState,
    layout: Option<PlateLayout>,
    dirty: bool,
}

impl Default for LayoutCanvas {
    fn default() -> Self {
        Self::new(RenderSettings::default())
    }
}

impl LayoutCanvas {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            view: ViewState::from_settings(&settings),
            settings,
            layout: None,
            dirty: true,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn layout(&self) -> Option<&PlateLayout> {
        self.layout.as_ref()
    }

    /// Show a new layout (or none); hides any tooltip
    pub fn set_layout(&mut self, layout: Option<PlateLayout>) {
        self.view.hide_tooltip();
        self.layout = layout;
        self.dirty = true;
    }

    /// Whether the last handler changed what is on screen
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Current offcut hover region in pixels
    pub fn hit_region(&self) -> Option<HitRegion> {
        self.layout
            .as_ref()
            .and_then(|layout| offcut_hit_region(layout, &self.view, &self.settings))
    }

    pub fn pointer_down(&mut self, p: Point) {
        let changed = self.view.pointer_down(p);
        self.mark(changed);
    }

    /// Hover check, then pan if a drag is in progress
    pub fn pointer_move(&mut self, p: Point) {
        let hovering = self.hit_region().is_some_and(|region| region.contains(p));
        let mut changed = if hovering {
            self.view
                .show_tooltip(OFFCUT_TOOLTIP, tooltip_position(p, &self.settings))
        } else {
            self.view.hide_tooltip()
        };
        changed |= self.view.pointer_move(p);
        self.mark(changed);
    }

    pub fn pointer_up(&mut self) {
        let changed = self.view.pointer_up();
        self.mark(changed);
    }

    pub fn pointer_leave(&mut self) {
        let changed = self.view.pointer_leave();
        self.mark(changed);
    }

    pub fn zoom_in(&mut self) {
        let changed = self.view.zoom_in();
        self.mark(changed);
    }

    pub fn zoom_out(&mut self) {
        let changed = self.view.zoom_out();
        self.mark(changed);
    }

    pub fn set_scale(&mut self, scale: f64) {
        let changed = self.view.set_scale(scale);
        self.mark(changed);
    }

    /// Clear and rebuild the full frame
    pub fn render(&mut self) -> Scene {
        self.dirty = false;
        match &self.layout {
            Some(layout) => render_layout(layout, &self.view, &self.settings),
            None => render_empty(&self.view, &self.settings),
        }
    }

    /// Full frame sized to fit every plate, for writing to a file
    pub fn render_export(&mut self) -> Scene {
        self.dirty = false;
        match &self.layout {
            Some(layout) => render_for_export(layout, &self.view, &self.settings),
            None => render_empty(&self.view, &self.settings),
        }
    }

    fn mark(&mut self, changed: bool) {
        self.dirty |= changed;
    }
}
