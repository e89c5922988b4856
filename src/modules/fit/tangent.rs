//! Unit tangent estimation at the ends of a point range.
//!
//! Both end tangents point *into* the range: the left one from the first
//! sample toward the second, the right one from the last sample toward the
//! second-to-last. A zero vector means "unconstrained" and comes back whenever
//! the two points used coincide.

use crate::data::Point;

/// Direction from the first point toward the second.
pub fn left_tangent(points: &[Point]) -> Point {
    match points {
        [first, second, ..] => (*second - *first).normalize(),
        _ => Point::ZERO,
    }
}

/// Direction from the last point toward the second-to-last.
pub fn right_tangent(points: &[Point]) -> Point {
    match points {
        [.., before_last, last] => (*before_last - *last).normalize(),
        _ => Point::ZERO,
    }
}

/// Tangent at an interior split point, oriented toward the left sub-range.
///
/// The left sub-range uses it as its right tangent and the right sub-range
/// uses its negation as its left tangent, which keeps the join G1.
pub fn center_tangent(points: &[Point], center: usize) -> Point {
    if center == 0 || center + 1 >= points.len() {
        return Point::ZERO;
    }

    let before = points[center - 1];
    let after = points[center + 1];
    if before == after {
        // the stroke doubles back on itself; turn the incoming direction by 90 degrees
        (points[center] - before).perp().normalize()
    } else {
        (before - after).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use approx::assert_relative_eq;

    #[test]
    fn test_end_tangents_point_inward() {
        let points = path![(0, 0), (10, 0), (10, 10), (20, 10)];

        assert_eq!(left_tangent(&points), Point::new(1.0, 0.0));
        assert_eq!(right_tangent(&points), Point::new(-1.0, 0.0));
    }

    #[test]
    fn test_zero_length_tangent_is_unconstrained() {
        let points = path![(3, 3), (3, 3), (8, 1)];
        assert_eq!(left_tangent(&points), Point::ZERO);
        assert_eq!(left_tangent(&points[..1]), Point::ZERO);
    }

    #[test]
    fn test_center_tangent() {
        let points = path![(0, 0), (10, 0), (20, 10)];
        let tangent = center_tangent(&points, 1);

        // from the following point toward the preceding one
        let expected = Point::new(-20.0, -10.0).normalize();
        assert_relative_eq!(tangent.x, expected.x);
        assert_relative_eq!(tangent.y, expected.y);
        assert_relative_eq!(tangent.length(), 1.0);
    }

    #[test]
    fn test_center_tangent_on_reversal() {
        let points = path![(0, 0), (10, 0), (0, 0)];
        let tangent = center_tangent(&points, 1);
        assert_relative_eq!(tangent.length(), 1.0);
        assert_relative_eq!(tangent.x, 0.0);
    }

    #[test]
    fn test_center_tangent_at_boundary() {
        let points = path![(0, 0), (10, 0), (20, 10)];
        assert_eq!(center_tangent(&points, 0), Point::ZERO);
        assert_eq!(center_tangent(&points, 2), Point::ZERO);
    }
}
