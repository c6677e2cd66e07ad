//! SVG export for inspecting checkbox geometry.
//!
//! Hosts render through their own vector backend; this module exists for
//! debugging and golden-image work. [`checkbox_svg`] writes the whole control
//! in either state, and [`segment_debug_svg`] overlays one segment with its
//! anchor points and control handles, the way the original tooling drew
//! marker dots and tangent lines while the arc math was being tuned.

use std::fmt::Write;

use glam::Vec2;

use crate::checkbox::CheckboxGeometry;
use crate::color::Rgba;
use crate::path::{Path, PathCommand};

/// Converts a path to SVG path data (`M`/`L`/`C`/`Z`).
pub fn path_data(path: &Path) -> String {
    let mut data = String::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => write!(data, "M {} {} ", p.x, p.y).unwrap(),
            PathCommand::LineTo(p) => write!(data, "L {} {} ", p.x, p.y).unwrap(),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => write!(
                data,
                "C {} {} {} {} {} {} ",
                control1.x, control1.y, control2.x, control2.y, to.x, to.y
            )
            .unwrap(),
            PathCommand::Close => data.push_str("Z "),
        }
    }
    data.trim_end().to_string()
}

/// CSS color for an [`Rgba`], as `rgba(r, g, b, a)` with 8-bit channels.
pub fn css_color(color: Rgba) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color.r * 255.0).round() as u8,
        (color.g * 255.0).round() as u8,
        (color.b * 255.0).round() as u8,
        color.a
    )
}

fn open_document(side: f32) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{side}\" height=\"{side}\" viewBox=\"0 0 {side} {side}\">\n"
    )
}

/// Renders the full checkbox in one state as an SVG document.
pub fn checkbox_svg(geometry: &CheckboxGeometry, checked: bool) -> String {
    let mut svg = open_document(geometry.side());
    for visual in geometry.visuals(checked) {
        let color = css_color(visual.fill);
        writeln!(
            svg,
            "  <path d=\"{}\" fill=\"{color}\" stroke=\"{color}\" stroke-width=\"{}\"/>",
            path_data(&visual.path),
            visual.stroke_width
        )
        .unwrap();
    }
    svg.push_str("</svg>\n");
    svg
}

/// Renders one segment with its anchors and bezier control handles marked.
///
/// Anchors are drawn as dots, control points as smaller dots joined to their
/// anchor by a handle line.
pub fn segment_debug_svg(geometry: &CheckboxGeometry, segment: usize, checked: bool) -> String {
    let visual = geometry.segment_visual(segment, checked);

    let mut svg = open_document(geometry.side());
    writeln!(
        svg,
        "  <path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"0.5\"/>",
        path_data(&visual.path)
    )
    .unwrap();

    let mut current = None;
    for cmd in visual.path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                write_anchor(&mut svg, p);
                current = Some(p);
            }
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                for (anchor, control) in [(current, control1), (Some(to), control2)] {
                    if let Some(anchor) = anchor {
                        writeln!(
                            svg,
                            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"red\" stroke-width=\"0.25\"/>",
                            anchor.x, anchor.y, control.x, control.y
                        )
                        .unwrap();
                    }
                    writeln!(
                        svg,
                        "  <circle cx=\"{}\" cy=\"{}\" r=\"1\" fill=\"gray\"/>",
                        control.x, control.y
                    )
                    .unwrap();
                }
                write_anchor(&mut svg, to);
                current = Some(to);
            }
            PathCommand::Close => {}
        }
    }
    svg.push_str("</svg>\n");
    svg
}

fn write_anchor(svg: &mut String, p: Vec2) {
    writeln!(svg, "  <circle cx=\"{}\" cy=\"{}\" r=\"2\" fill=\"blue\"/>", p.x, p.y).unwrap();
}
