//! Draw command model
//!
//! A rendered layout is a flat, fully built list of draw commands in
//! content space (millimetres) plus the transform that maps content to
//! canvas pixels:
//!
//! ```text
//! pixel = offset + scale * content
//! ```

use serde::{Deserialize, Serialize};

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const OFFCUT_RED: Color = Color::rgb(255, 5, 5);
    pub const TOOLTIP_RED: Color = Color::rgb(255, 0, 0);
    pub const LABEL_RED: Color = Color::rgb(255, 0, 0);
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// How a rectangle is painted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RectStyle {
    /// Outline only
    Stroke { color: Color, width: f64 },
    /// Solid fill
    Fill { color: Color },
}

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Which part of the layout a command belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layer {
    PlateOutline,
    UsedArea,
    CourseDivider,
    OffcutHatch,
    Label,
    Tooltip,
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Clear the whole canvas (pixel size)
    Clear { width: f64, height: f64 },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        style: RectStyle,
        layer: Layer,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
        layer: Layer,
    },
    Text {
        position: Point,
        text: String,
        font_size: f64,
        bold: bool,
        color: Color,
        anchor: TextAnchor,
        layer: Layer,
    },
}

impl DrawCommand {
    /// Layer of the command, `None` for `Clear`
    pub fn layer(&self) -> Option<Layer> {
        match self {
            DrawCommand::Clear { .. } => None,
            DrawCommand::Rect { layer, .. }
            | DrawCommand::Line { layer, .. }
            | DrawCommand::Text { layer, .. } => Some(*layer),
        }
    }
}

/// Content-to-pixel mapping of a scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneTransform {
    /// Pan offset in pixels, applied after scaling
    pub offset: Point,
    /// Pixels per content millimetre
    pub scale: f64,
}

impl SceneTransform {
    /// Map a content point to canvas pixels
    pub fn to_pixel(&self, p: Point) -> Point {
        Point::new(self.offset.x + p.x * self.scale, self.offset.y + p.y * self.scale)
    }

    /// Map a canvas pixel to content space
    pub fn to_content(&self, p: Point) -> Point {
        Point::new((p.x - self.offset.x) / self.scale, (p.y - self.offset.y) / self.scale)
    }
}

/// A complete frame: canvas size, transform and commands in paint order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub transform: SceneTransform,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the scene has no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands on one layer, in paint order
    pub fn on_layer(&self, layer: Layer) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |c| c.layer() == Some(layer))
    }

    /// All label and tooltip strings, in paint order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
