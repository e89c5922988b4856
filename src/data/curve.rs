//! A Bezier curve: a collection of render segments drawn in order.

use crate::data::cubic::CubicBezier;
use crate::data::point::Point;
use crate::data::segment::BezierSegment;
use serde::{Deserialize, Serialize};

/// A path consisting of zero or more segments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BezierCurve {
    pub segments: Vec<BezierSegment>,
}

impl BezierCurve {
    /// Create a new bezier curve from a list of segments
    pub fn new(segments: Vec<BezierSegment>) -> Self {
        Self { segments }
    }

    /// Create a bezier curve from a single segment
    pub fn from_segment(segment: &BezierSegment) -> Self {
        Self {
            segments: vec![segment.clone()],
        }
    }

    /// Create a bezier curve from a fitted cubic sequence
    pub fn from_cubics(curves: &[CubicBezier]) -> Self {
        Self {
            segments: curves.iter().copied().map(BezierSegment::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(BezierSegment::start)
    }

    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(BezierSegment::end)
    }

    /// Append every segment of `other` after this curve's segments
    pub fn extend(&mut self, other: BezierCurve) {
        self.segments.extend(other.segments);
    }
}
