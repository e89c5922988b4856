//! Render segment: a line, quadratic or cubic piece of a drawn path

use crate::data::cubic::CubicBezier;
use crate::data::point::Point;
use serde::{Deserialize, Serialize};

/// A render segment. Fitted strokes only produce cubics; lines and quadratics
/// come from previews of the raw, not yet fitted tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BezierSegment {
    /// Straight line: start point, end point
    Line { points: [Point; 2] },
    /// Quadratic bezier: start point, control point, end point
    Quadratic { points: [Point; 3] },
    /// Cubic bezier: start point, control1, control2, end point
    Cubic { points: [Point; 4] },
}

impl BezierSegment {
    pub fn line(p1: Point, p2: Point) -> Self {
        Self::Line { points: [p1, p2] }
    }

    pub fn quadratic(p1: Point, p2: Point, p3: Point) -> Self {
        Self::Quadratic {
            points: [p1, p2, p3],
        }
    }

    /// Get all control points for this segment
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Line { points } => points.to_vec(),
            Self::Quadratic { points } => points.to_vec(),
            Self::Cubic { points } => points.to_vec(),
        }
    }

    pub fn start(&self) -> Point {
        match self {
            Self::Line { points } => points[0],
            Self::Quadratic { points } => points[0],
            Self::Cubic { points } => points[0],
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Self::Line { points } => points[1],
            Self::Quadratic { points } => points[2],
            Self::Cubic { points } => points[3],
        }
    }

    /// Get a point on the segment at parameter t (0 <= t <= 1)
    pub fn point_at(&self, t: f64) -> Point {
        let t1 = 1.0 - t;
        match self {
            Self::Line { points } => t1 * points[0] + t * points[1],
            Self::Quadratic { points } => {
                // B(t) = (1-t)^2 * p1 + 2(1-t) * t * p2 + t^2 * p3
                t1.powi(2) * points[0] + 2.0 * t1 * t * points[1] + t.powi(2) * points[2]
            }
            Self::Cubic { points } => CubicBezier { points: *points }.point_at(t),
        }
    }
}

impl From<CubicBezier> for BezierSegment {
    fn from(curve: CubicBezier) -> Self {
        Self::Cubic {
            points: curve.points,
        }
    }
}
