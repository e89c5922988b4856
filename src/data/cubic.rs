//! Cubic Bezier curve: the unit of output of the fitting engine.

use crate::data::point::Point;
use serde::{Deserialize, Serialize};

/// A cubic bezier with exactly four points: start anchor, two control points, end anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub points: [Point; 4],
}

impl CubicBezier {
    pub fn new(p0: Point, c1: Point, c2: Point, p3: Point) -> Self {
        Self {
            points: [p0, c1, c2, p3],
        }
    }

    /// A zero-length curve sitting on a single point.
    pub fn degenerate(p: Point) -> Self {
        Self::new(p, p, p, p)
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[3]
    }

    /// Unit direction of travel at the end anchor, zero when the last control
    /// point sits on the anchor.
    pub fn end_direction(&self) -> Point {
        (self.points[3] - self.points[2]).normalize()
    }

    /// Get a point on the curve at parameter t (0 <= t <= 1)
    pub fn point_at(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = self.points;
        let t1 = 1.0 - t;

        // B(t) = (1-t)^3 * p0 + 3(1-t)^2 * t * p1 + 3(1-t) * t^2 * p2 + t^3 * p3
        t1.powi(3) * p0 + 3.0 * t1.powi(2) * t * p1 + 3.0 * t1 * t.powi(2) * p2 + t.powi(3) * p3
    }

    /// First derivative B'(t), a quadratic bezier over the control point differences.
    pub fn derivative_at(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = self.points;
        let q0 = 3.0 * (p1 - p0);
        let q1 = 3.0 * (p2 - p1);
        let q2 = 3.0 * (p3 - p2);
        let t1 = 1.0 - t;

        t1 * t1 * q0 + 2.0 * t1 * t * q1 + t * t * q2
    }

    /// Second derivative B''(t), linear in t.
    pub fn second_derivative_at(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = self.points;
        let r0 = 6.0 * (p2 - 2.0 * p1 + p0);
        let r1 = 6.0 * (p3 - 2.0 * p2 + p1);

        (1.0 - t) * r0 + t * r1
    }

    /// Generate a series of evenly parameterized points along the curve
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => Vec::new(),
            1 => vec![self.start()],
            _ => (0..num_points)
                .map(|i| self.point_at(i as f64 / (num_points - 1) as f64))
                .collect(),
        }
    }
}
