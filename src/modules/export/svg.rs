//! SVG export utilities for fitted strokes
//!
//! # Examples
//!
//! ```rust
//! use bezier_stroke::{cubic, curve_from, modules::export::svg};
//!
//! let curve = curve_from!(cubic!([
//!     (50.0, 200.0),
//!     (100.0, 50.0),
//!     (200.0, 50.0),
//!     (250.0, 200.0)
//! ]));
//!
//! let svg_string = svg::to_svg(&curve, 300, 300);
//! assert!(svg_string.contains("C100,50,200,50,250,200"));
//! ```

use crate::data::{BezierCurve, Point};
use crate::modules::export::svg_path::ToSvgPath;
use crate::modules::stroke::tail::StrokeSnapshot;
use svg::node::element::{Circle, Group, Path};
use svg::Document;

fn document(width: u32, height: u32) -> Document {
    Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", format!("0 0 {} {}", width, height))
}

fn stroke_path(curve: &BezierCurve, color: &str) -> Path {
    Path::new()
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", 2)
        .set("stroke-linecap", "round")
        .set("d", curve.to_svg_path())
}

fn point_markers(points: &[Point]) -> Group {
    points.iter().fold(Group::new(), |group, point| {
        group.add(
            Circle::new()
                .set("cx", point.x)
                .set("cy", point.y)
                .set("r", 2)
                .set("fill", "red"),
        )
    })
}

/// Export a curve to an SVG document with a single black path
pub fn to_svg(curve: &BezierCurve, width: u32, height: u32) -> String {
    let mut document = document(width, height);
    if !curve.is_empty() {
        document = document.add(stroke_path(curve, "black"));
    }
    document.to_string()
}

/// Export points as small red circles
pub fn points_to_svg(points: &[Point], width: u32, height: u32) -> String {
    document(width, height).add(point_markers(points)).to_string()
}

/// Export a render snapshot: committed curves in black, the tail preview in
/// gray and, when the snapshot asks for it, the buffered samples.
pub fn stroke_to_svg(snapshot: &StrokeSnapshot, width: u32, height: u32) -> String {
    let mut document = document(width, height);
    if !snapshot.committed.is_empty() {
        document = document.add(stroke_path(&snapshot.committed, "black"));
    }
    if !snapshot.tail.is_empty() {
        document = document.add(stroke_path(&snapshot.tail, "gray"));
    }
    if snapshot.show_points {
        document = document.add(point_markers(&snapshot.points));
    }
    document.to_string()
}
