//! Plate layout renderer
//!
//! Builds the full scene for a layout: plates stacked vertically, used
//! region filled, course dividers, offcut cross-hatch, dimension labels
//! and the hover tooltip. Geometry is in millimetres; sizes that must
//! look the same at every zoom level are given in pixels and divided by
//! the scale.

use crate::draw::{Color, DrawCommand, Layer, Point, RectStyle, Scene, TextAnchor};
use crate::view_state::ViewState;
use platekit_core::units::format_mm;
use platekit_layout::{PlateCut, PlateLayout};
use platekit_settings::RenderSettings;

/// Plates this far (in pixels) outside the canvas are still emitted so
/// their labels stay visible while panning.
const CULL_MARGIN_PX: f64 = 60.0;

/// Leader line length in pixels
const LEADER_PX: f64 = 15.0;

/// Gap between a leader line and its text in pixels
const LABEL_GAP_PX: f64 = 5.0;

/// Text padding inside the tooltip box in pixels
const TOOLTIP_PADDING_PX: (f64, f64) = (5.0, 20.0);

/// Build the scene for `layout` as seen through `view`.
///
/// Every plate gets a row unless `cull_offscreen` is set, in which case
/// only plates near the canvas are emitted.
pub fn render_layout(layout: &PlateLayout, view: &ViewState, settings: &RenderSettings) -> Scene {
    let mut scene = empty_scene(view, settings);
    let scale = view.scale();
    let origin = Point::new(settings.margin_x_px / scale, settings.margin_y_px / scale);
    let pitch = layout.plate_width + settings.vertical_gap_mm;

    let plates = if settings.cull_offscreen {
        visible_plates(layout, view, settings, origin.y, pitch)
    } else {
        0..layout.num_plates_required
    };
    tracing::debug!(
        "Rendering plates {:?} of {} at scale {}",
        plates,
        layout.num_plates_required,
        scale
    );

    for cut in plates.filter_map(|i| layout.plate(i)) {
        let top_left = Point::new(origin.x, origin.y + cut.index as f64 * pitch);
        draw_plate(&mut scene.commands, layout, &cut, top_left, scale, settings);
    }

    draw_tooltip(&mut scene.commands, view, settings);
    scene
}

/// Build a scene whose canvas is large enough to hold every plate.
///
/// Culling is turned off and the canvas grows past the configured size
/// to the bottom-right corner of the last plate plus the margins.
pub fn render_for_export(
    layout: &PlateLayout,
    view: &ViewState,
    settings: &RenderSettings,
) -> Scene {
    let (width, height) = content_extent(layout, view, settings);
    let export = RenderSettings {
        canvas_width: settings.canvas_width.max(width),
        canvas_height: settings.canvas_height.max(height),
        cull_offscreen: false,
        ..settings.clone()
    };
    render_layout(layout, view, &export)
}

/// Pixel size needed to show all plates with the margins on every side
fn content_extent(layout: &PlateLayout, view: &ViewState, settings: &RenderSettings) -> (u32, u32) {
    let scale = view.scale();
    let offset = view.offset();
    let plates = layout.num_plates_required as f64;
    let stack = plates * layout.plate_width + (plates - 1.0).max(0.0) * settings.vertical_gap_mm;

    let width = offset.x + 2.0 * settings.margin_x_px + layout.plate_length * scale;
    let height = offset.y + 2.0 * settings.margin_y_px + stack * scale;
    // Float to int casts saturate
    (width.ceil().max(0.0) as u32, height.ceil().max(0.0) as u32)
}

/// A scene that only clears the canvas, plus the tooltip if one is shown
pub fn render_empty(view: &ViewState, settings: &RenderSettings) -> Scene {
    let mut scene = empty_scene(view, settings);
    draw_tooltip(&mut scene.commands, view, settings);
    scene
}

fn empty_scene(view: &ViewState, settings: &RenderSettings) -> Scene {
    let width = f64::from(settings.canvas_width);
    let height = f64::from(settings.canvas_height);
    Scene {
        width,
        height,
        transform: view.transform(),
        commands: vec![DrawCommand::Clear { width, height }],
    }
}

/// Indices of plates that intersect the canvas vertically, used when culling
fn visible_plates(
    layout: &PlateLayout,
    view: &ViewState,
    settings: &RenderSettings,
    origin_y: f64,
    pitch: f64,
) -> std::ops::Range<u64> {
    if layout.num_plates_required == 0 || pitch <= 0.0 {
        return 0..0;
    }
    let transform = view.transform();
    let margin = CULL_MARGIN_PX / view.scale();
    let top = transform.to_content(Point::new(0.0, 0.0)).y - margin;
    let bottom = transform
        .to_content(Point::new(0.0, f64::from(settings.canvas_height)))
        .y
        + margin;

    let first = ((top - layout.plate_width - origin_y) / pitch).ceil().max(0.0);
    let last = ((bottom - origin_y) / pitch).floor();
    if last < first {
        return 0..0;
    }
    // Float to int casts saturate
    let first = first as u64;
    let end = (last as u64)
        .saturating_add(1)
        .min(layout.num_plates_required);
    first.min(end)..end
}

fn draw_plate(
    out: &mut Vec<DrawCommand>,
    layout: &PlateLayout,
    cut: &PlateCut,
    top_left: Point,
    scale: f64,
    settings: &RenderSettings,
) {
    let px = |v: f64| v / scale;
    let width = layout.plate_width;
    let length = layout.plate_length;

    out.push(DrawCommand::Rect {
        origin: top_left,
        width: length,
        height: width,
        style: RectStyle::Stroke {
            color: Color::BLACK,
            width: px(settings.stroke_width_px),
        },
        layer: Layer::PlateOutline,
    });

    out.push(DrawCommand::Rect {
        origin: top_left,
        width: cut.used_length,
        height: width,
        style: RectStyle::Fill { color: Color::GRAY },
        layer: Layer::UsedArea,
    });

    for course in 1..cut.units {
        let x = top_left.x + course as f64 * layout.developed_length;
        out.push(DrawCommand::Line {
            from: Point::new(x, top_left.y),
            to: Point::new(x, top_left.y + width),
            color: Color::WHITE,
            width: px(1.0),
            layer: Layer::CourseDivider,
        });
    }

    if cut.has_offcut() {
        let offcut_origin = Point::new(top_left.x + cut.used_length, top_left.y);
        draw_hatch(out, offcut_origin, cut.offcut_length, width, scale, settings);
    }

    draw_labels(out, layout, cut, top_left, scale, settings);
}

/// Red cross-hatch over a rectangle, at most `max_hatch_lines` per direction
fn draw_hatch(
    out: &mut Vec<DrawCommand>,
    origin: Point,
    length: f64,
    width: f64,
    scale: f64,
    settings: &RenderSettings,
) {
    let line_width = 1.0 / scale;
    let spacing = settings.hatch_spacing_px / scale;

    let vertical = hatch_positions(length, spacing, settings.max_hatch_lines);
    for dx in vertical {
        out.push(DrawCommand::Line {
            from: Point::new(origin.x + dx, origin.y),
            to: Point::new(origin.x + dx, origin.y + width),
            color: Color::OFFCUT_RED,
            width: line_width,
            layer: Layer::OffcutHatch,
        });
    }

    let horizontal = hatch_positions(width, spacing, settings.max_hatch_lines);
    for dy in horizontal {
        out.push(DrawCommand::Line {
            from: Point::new(origin.x, origin.y + dy),
            to: Point::new(origin.x + length, origin.y + dy),
            color: Color::OFFCUT_RED,
            width: line_width,
            layer: Layer::OffcutHatch,
        });
    }
}

/// Offsets in `[0, extent]` spaced `spacing` apart, widened to fit `max`
fn hatch_positions(extent: f64, spacing: f64, max: usize) -> impl Iterator<Item = f64> {
    let (count, spacing) = if extent <= 0.0 || spacing <= 0.0 || max == 0 {
        (0, 1.0)
    } else {
        let natural = (extent / spacing).floor() as usize + 1;
        if natural > max {
            (max, extent / max.saturating_sub(1).max(1) as f64)
        } else {
            (natural, spacing)
        }
    };
    (0..count).map(move |k| k as f64 * spacing)
}

fn draw_labels(
    out: &mut Vec<DrawCommand>,
    layout: &PlateLayout,
    cut: &PlateCut,
    top_left: Point,
    scale: f64,
    settings: &RenderSettings,
) {
    let px = |v: f64| v / scale;
    let font_size = px(settings.font_size_px);
    let width = layout.plate_width;
    let length = layout.plate_length;
    let mid_y = top_left.y + width / 2.0;

    // Width, to the left of the plate
    let leader_end = Point::new(top_left.x - px(LEADER_PX), mid_y);
    leader(out, Point::new(top_left.x, mid_y), leader_end, Color::BLACK, scale);
    label(
        out,
        Point::new(leader_end.x - px(LABEL_GAP_PX), mid_y),
        format!("Width: {}", format_mm(width)),
        font_size,
        Color::BLACK,
        TextAnchor::End,
    );

    // Length, above the plate
    let mid_x = top_left.x + length / 2.0;
    let leader_end = Point::new(mid_x, top_left.y - px(LEADER_PX));
    leader(out, Point::new(mid_x, top_left.y), leader_end, Color::BLACK, scale);
    label(
        out,
        Point::new(mid_x, leader_end.y - px(LABEL_GAP_PX)),
        format!("Length: {}", format_mm(length)),
        font_size,
        Color::BLACK,
        TextAnchor::Middle,
    );

    // Developed length, inside the first course
    let course_mid = top_left.x + layout.developed_length.min(cut.used_length) / 2.0;
    let leader_start = Point::new(course_mid, top_left.y + px(LABEL_GAP_PX));
    let leader_end = Point::new(course_mid, leader_start.y + px(LEADER_PX));
    leader(out, leader_start, leader_end, Color::BLACK, scale);
    label(
        out,
        Point::new(course_mid, leader_end.y + font_size),
        format!("Developed Length: {}", format_mm(layout.developed_length)),
        font_size,
        Color::BLACK,
        TextAnchor::Middle,
    );

    // Offcut, to the right of the hatched region's centre
    if cut.has_offcut() {
        let offcut_mid = Point::new(top_left.x + cut.used_length + cut.offcut_length / 2.0, mid_y);
        let leader_end = Point::new(offcut_mid.x + px(LEADER_PX), offcut_mid.y - px(LEADER_PX));
        leader(out, offcut_mid, leader_end, Color::LABEL_RED, scale);
        label(
            out,
            Point::new(leader_end.x + px(LABEL_GAP_PX), leader_end.y),
            format!("Offcut: {}", format_mm(cut.offcut_length)),
            font_size,
            Color::LABEL_RED,
            TextAnchor::Start,
        );
    }
}

fn leader(out: &mut Vec<DrawCommand>, from: Point, to: Point, color: Color, scale: f64) {
    out.push(DrawCommand::Line {
        from,
        to,
        color,
        width: 1.0 / scale,
        layer: Layer::Label,
    });
}

fn label(
    out: &mut Vec<DrawCommand>,
    position: Point,
    text: String,
    font_size: f64,
    color: Color,
    anchor: TextAnchor,
) {
    out.push(DrawCommand::Text {
        position,
        text,
        font_size,
        bold: true,
        color,
        anchor,
        layer: Layer::Label,
    });
}

/// Tooltip box at the cursor, converted from pixels to content space
fn draw_tooltip(out: &mut Vec<DrawCommand>, view: &ViewState, settings: &RenderSettings) {
    let tooltip = view.tooltip();
    if !tooltip.visible {
        return;
    }
    let scale = view.scale();
    let px = |v: f64| v / scale;
    let origin = view.transform().to_content(tooltip.position);
    let (box_w, box_h) = settings.tooltip_size_px;

    out.push(DrawCommand::Rect {
        origin,
        width: px(box_w),
        height: px(box_h),
        style: RectStyle::Fill {
            color: Color::TOOLTIP_RED,
        },
        layer: Layer::Tooltip,
    });
    out.push(DrawCommand::Text {
        position: Point::new(
            origin.x + px(TOOLTIP_PADDING_PX.0),
            origin.y + px(TOOLTIP_PADDING_PX.1),
        ),
        text: tooltip.text.clone(),
        font_size: px(settings.font_size_px),
        bold: false,
        color: Color::WHITE,
        anchor: TextAnchor::Start,
        layer: Layer::Tooltip,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hatch_positions_natural_spacing() {
        let positions: Vec<f64> = hatch_positions(10.0, 4.0, 100).collect();
        assert_eq!(positions, vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn test_hatch_positions_capped() {
        let positions: Vec<f64> = hatch_positions(1000.0, 1.0, 11).collect();
        assert_eq!(positions.len(), 11);
        assert_eq!(positions[10], 1000.0);
    }

    #[test]
    fn test_hatch_positions_empty_extent() {
        assert_eq!(hatch_positions(0.0, 4.0, 100).count(), 0);
    }
}
