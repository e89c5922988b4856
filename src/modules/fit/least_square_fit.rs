//! Fitting a single cubic bezier to a point range with fixed end tangents
//!
//! The anchors are pinned to the first and last point and the interior control
//! points are constrained to lie on the end tangents:
//!
//! ```text
//! c1 = p0 + alpha_l * tan1
//! c2 = p3 + alpha_r * tan2
//! ```
//!
//! Minimizing `Σ‖B(t_i) - p_i‖²` over the two magnitudes leaves a 2x2 linear
//! system, see Schneider, "An Algorithm for Automatically Fitting Digitized
//! Curves", Graphics Gems 1990. When that system is singular, or yields a
//! magnitude that is not positive, both control points are placed a third of
//! the chord length out along their tangents instead.
//!
//! # Example
//!
//! ```rust
//! use bezier_stroke::modules::fit::least_square_fit::{compute_max_error, fit_cubic_with_tangents};
//! use bezier_stroke::modules::fit::t_heuristic::{estimate_t_values_with_heuristic, THeuristic};
//! use bezier_stroke::modules::fit::tangent::{left_tangent, right_tangent};
//! use bezier_stroke::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 8.0),
//!     Point::new(20.0, 9.0),
//!     Point::new(30.0, 0.0),
//! ];
//! let t_values = estimate_t_values_with_heuristic(&points, THeuristic::ChordLength);
//!
//! let curve = fit_cubic_with_tangents(
//!     &points,
//!     &t_values,
//!     left_tangent(&points),
//!     right_tangent(&points),
//! )
//! .unwrap();
//! let (max_error, _worst) = compute_max_error(&points, &t_values, &curve);
//!
//! assert_eq!(curve.start(), points[0]);
//! assert_eq!(curve.end(), points[3]);
//! assert!(max_error.is_finite());
//! ```

use crate::constants::{ALPHA_EPSILON_RATIO, DETERMINANT_EPSILON};
use crate::data::{CubicBezier, Point};
use crate::error::{BezierError, BezierResult};
use log::trace;
use nalgebra::{Matrix2, Vector2};

/// Solve the normal equations for the two tangent magnitudes `(alpha_l, alpha_r)`.
///
/// Fails with [`BezierError::DegenerateGeometry`] when the system is singular
/// (coincident points, zero tangents) or a magnitude is not usable.
pub fn least_square_solve_alphas(
    points: &[Point],
    t_values: &[f64],
    tan1: Point,
    tan2: Point,
) -> BezierResult<(f64, f64)> {
    let (first, last) = match points {
        [first, .., last] => (*first, *last),
        _ => return Err(BezierError::InsufficientPoints(points.len())),
    };

    let t_hat_1: Vector2<f64> = tan1.into();
    let t_hat_2: Vector2<f64> = tan2.into();
    let v_first: Vector2<f64> = first.into();
    let v_last: Vector2<f64> = last.into();

    let mut c = Matrix2::<f64>::zeros();
    let mut x = Vector2::<f64>::zeros();

    for (point, &t) in points.iter().zip(t_values) {
        let mt = 1.0 - t;
        // Bernstein basis
        let b0 = mt * mt * mt;
        let b1 = 3.0 * t * mt * mt;
        let b2 = 3.0 * t * t * mt;
        let b3 = t * t * t;

        let a1 = t_hat_1 * b1;
        let a2 = t_hat_2 * b2;

        c[(0, 0)] += a1.dot(&a1);
        c[(0, 1)] += a1.dot(&a2);
        c[(1, 1)] += a2.dot(&a2);

        // offset of the sample from the curve obtained with both control points on their anchors
        let v_point: Vector2<f64> = (*point).into();
        let shortfall = v_point - v_first * (b0 + b1) - v_last * (b2 + b3);
        x[0] += a1.dot(&shortfall);
        x[1] += a2.dot(&shortfall);
    }
    c[(1, 0)] = c[(0, 1)];

    if c.determinant().abs() < DETERMINANT_EPSILON {
        return Err(BezierError::DegenerateGeometry(
            "singular normal equations".to_string(),
        ));
    }
    let c_inv = c.try_inverse().ok_or_else(|| {
        BezierError::DegenerateGeometry("normal equations are not invertible".to_string())
    })?;
    let alpha = c_inv * x;

    let epsilon = ALPHA_EPSILON_RATIO * first.distance(&last);
    if !(alpha[0].is_finite() && alpha[1].is_finite()) || alpha[0] < epsilon || alpha[1] < epsilon
    {
        return Err(BezierError::DegenerateGeometry(format!(
            "unusable tangent magnitudes ({}, {})",
            alpha[0], alpha[1]
        )));
    }

    Ok((alpha[0], alpha[1]))
}

/// Control points a third of the chord out along each tangent.
///
/// An unconstrained (zero) tangent puts its control point on the chord itself.
pub fn heuristic_cubic(first: Point, last: Point, tan1: Point, tan2: Point) -> CubicBezier {
    let alpha = first.distance(&last) / 3.0;
    let c1 = if tan1.is_zero() {
        first + (last - first) * (1.0 / 3.0)
    } else {
        first + tan1 * alpha
    };
    let c2 = if tan2.is_zero() {
        last + (first - last) * (1.0 / 3.0)
    } else {
        last + tan2 * alpha
    };
    CubicBezier::new(first, c1, c2, last)
}

/// Fit one cubic bezier to `points` given their parameters and unit end tangents.
///
/// `tan1` points from the first sample into the range and `tan2` from the last
/// sample into the range.
pub fn fit_cubic_with_tangents(
    points: &[Point],
    t_values: &[f64],
    tan1: Point,
    tan2: Point,
) -> BezierResult<CubicBezier> {
    if points.len() < 2 {
        return Err(BezierError::InsufficientPoints(points.len()));
    }
    if points.len() != t_values.len() {
        return Err(BezierError::DegenerateGeometry(format!(
            "{} points but {} t values",
            points.len(),
            t_values.len()
        )));
    }

    let first = points[0];
    let last = points[points.len() - 1];
    if points.len() == 2 {
        return Ok(heuristic_cubic(first, last, tan1, tan2));
    }

    match least_square_solve_alphas(points, t_values, tan1, tan2) {
        Ok((alpha_l, alpha_r)) => Ok(CubicBezier::new(
            first,
            first + tan1 * alpha_l,
            last + tan2 * alpha_r,
            last,
        )),
        Err(err) => {
            trace!("{}, using chord heuristic", err);
            Ok(heuristic_cubic(first, last, tan1, tan2))
        }
    }
}

/// Maximum squared distance between each point and the curve at that point's `t`.
///
/// Returns `(max_error, worst_index)`. When every error is zero the index is the
/// middle of the range, so a caller splitting there still gets an interior point.
pub fn compute_max_error(points: &[Point], t_values: &[f64], curve: &CubicBezier) -> (f64, usize) {
    let mut max_error = 0.0;
    let mut worst_index = points.len() / 2;

    for (i, (point, &t)) in points.iter().zip(t_values).enumerate() {
        let error = curve.point_at(t).distance_squared(point);
        if error > max_error {
            max_error = error;
            worst_index = i;
        }
    }

    (max_error, worst_index)
}
