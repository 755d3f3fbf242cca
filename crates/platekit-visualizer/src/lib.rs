//! # PlateKit Visualizer
//!
//! Renders plate cutting layouts to draw commands and SVG.
//!
//! - **Renderer**: plates, used area, course dividers, offcut hatch, labels
//! - **View State**: zoom, pan by drag, offcut hover tooltip
//! - **Canvas**: layout plus view with dirty tracking
//! - **Results**: report model for the results page

pub mod canvas;
pub mod draw;
pub mod plate_renderer;
pub mod results_view;
pub mod svg_export;
pub mod view_state;

pub use canvas::LayoutCanvas;
pub use draw::{Color, DrawCommand, Layer, Point, RectStyle, Scene, SceneTransform, TextAnchor};
pub use hit_test::{offcut_hit_region, HitRegion, OFFCUT_TOOLTIP};
pub use plate_renderer::{render_empty, render_for_export, render_layout};
pub use results_view::{ResultsReport, ResultsView};
pub use svg_export::scene_to_svg;
pub use view_state::{Tooltip, ViewState};
