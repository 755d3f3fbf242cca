//! SVG export of rendered scenes
//!
//! Content-space commands are wrapped in a group carrying the scene
//! transform, so the document has the same pixel geometry as the canvas.

use crate::draw::{DrawCommand, RectStyle, Scene, TextAnchor};
use std::fmt::Write;

const FONT_FAMILY: &str = "Arial";

/// Serialize `scene` as a standalone SVG document
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut svg = String::new();
    let t = scene.transform;

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    );

    let mut group_open = false;
    for command in &scene.commands {
        if let DrawCommand::Clear { width, height } = command {
            if group_open {
                svg.push_str("</g>\n");
                group_open = false;
            }
            let _ = writeln!(
                svg,
                r#"<rect x="0" y="0" width="{width}" height="{height}" fill="white"/>"#
            );
            continue;
        }
        if !group_open {
            let _ = writeln!(
                svg,
                r#"<g transform="translate({} {}) scale({})">"#,
                t.offset.x, t.offset.y, t.scale
            );
            group_open = true;
        }
        write_command(&mut svg, command);
    }
    if group_open {
        svg.push_str("</g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_command(svg: &mut String, command: &DrawCommand) {
    match command {
        DrawCommand::Clear { .. } => {}
        DrawCommand::Rect {
            origin,
            width,
            height,
            style,
            ..
        } => {
            let paint = match style {
                RectStyle::Stroke { color, width } => {
                    format!(r#"fill="none" stroke="{color}" stroke-width="{width}""#)
                }
                RectStyle::Fill { color } => format!(r#"fill="{color}""#),
            };
            let _ = writeln!(
                svg,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" {paint}/>"#,
                origin.x, origin.y, width, height
            );
        }
        DrawCommand::Line {
            from,
            to,
            color,
            width,
            ..
        } => {
            let _ = writeln!(
                svg,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{color}" stroke-width="{width}"/>"#,
                from.x, from.y, to.x, to.y
            );
        }
        DrawCommand::Text {
            position,
            text,
            font_size,
            bold,
            color,
            anchor,
            ..
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let weight = if *bold { "bold" } else { "normal" };
            let _ = writeln!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" font-family="{FONT_FAMILY}" font-size="{font_size}" font-weight="{weight}" fill="{color}" text-anchor="{anchor}">{}</text>"#,
                position.x,
                position.y,
                escape(text)
            );
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
