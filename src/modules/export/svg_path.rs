//! SVG path data for fitted strokes
//!
//! Concatenating the committed curves of a stroke, each as a `C` command from
//! its start to its end anchor, reproduces the stroke. The start anchor of
//! every curve after the first is implied by the previous end anchor, so only
//! the first one is written, as the `M` command.
//!
//! # Examples
//!
//! ```rust
//! use bezier_stroke::{cubic, curve_from, modules::export::svg_path::ToSvgPath};
//!
//! let curve = curve_from!(cubic!([
//!     (50.0, 200.0),    // Start point
//!     (100.0, 50.0),    // Control point 1
//!     (200.0, 50.0),    // Control point 2
//!     (250.0, 200.0)    // End point
//! ]));
//!
//! assert_eq!(curve.to_svg_path(), "M50,200 C100,50,200,50,250,200");
//! ```
//!
//! A fitted cubic sequence can be written directly:
//!
//! ```rust
//! use bezier_stroke::{fit_curve, path, modules::export::svg_path::ToSvgPath};
//!
//! let curves = fit_curve(&path![(0, 0), (100, 0)], 1.0).curves();
//! assert!(curves.to_svg_path().starts_with("M0,0 C"));
//! ```

use crate::data::{BezierCurve, BezierSegment, CubicBezier};

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> String;
}

impl ToSvgPath for BezierCurve {
    fn to_svg_path(&self) -> String {
        let Some(start) = self.start() else {
            return String::new();
        };

        let mut result = format!("M{},{}", start.x, start.y);
        for segment in &self.segments {
            match segment {
                BezierSegment::Line { points } => {
                    result.push_str(&format!(" L{},{}", points[1].x, points[1].y));
                }
                BezierSegment::Quadratic { points } => {
                    result.push_str(&format!(
                        " Q{},{},{},{}",
                        points[1].x, points[1].y, points[2].x, points[2].y
                    ));
                }
                BezierSegment::Cubic { points } => {
                    result.push_str(&format!(
                        " C{},{},{},{},{},{}",
                        points[1].x,
                        points[1].y,
                        points[2].x,
                        points[2].y,
                        points[3].x,
                        points[3].y
                    ));
                }
            }
        }

        result
    }
}

impl ToSvgPath for [CubicBezier] {
    fn to_svg_path(&self) -> String {
        BezierCurve::from_cubics(self).to_svg_path()
    }
}

impl ToSvgPath for Vec<CubicBezier> {
    fn to_svg_path(&self) -> String {
        self.as_slice().to_svg_path()
    }
}
