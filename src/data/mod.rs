//! Core data structures: points, cubic curves, render segments and segment lists.

pub mod cubic;
pub mod curve;
pub mod macros;
pub mod point;
pub mod segment;

pub use cubic::CubicBezier;
pub use curve::BezierCurve;
pub use point::Point;
pub use segment::BezierSegment;
