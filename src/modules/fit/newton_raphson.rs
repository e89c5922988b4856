//! Newton-Raphson reparameterization
//!
//! For a sample `p` and its current parameter `t`, the squared distance
//! `f(t) = ½‖B(t) - p‖²` is stationary where
//!
//! ```text
//! f'(t)  = (B(t) - p) · B'(t) = 0
//! f''(t) = B'(t) · B'(t) + (B(t) - p) · B''(t)
//! ```
//!
//! One step moves `t` to `t - f'(t) / f''(t)`, clamped to `[0, 1]`.

use crate::constants::DERIVATIVE_EPSILON;
use crate::data::{CubicBezier, Point};

/// One Newton-Raphson step toward the parameter of the point on `curve` nearest to `point`.
///
/// Leaves `t` unchanged when the step is undefined (flat derivative) or not finite.
pub fn newton_raphson_root_find(curve: &CubicBezier, point: &Point, t: f64) -> f64 {
    let diff = curve.point_at(t) - *point;
    let d1 = curve.derivative_at(t);
    let d2 = curve.second_derivative_at(t);

    let numerator = diff.dot(&d1);
    let denominator = d1.dot(&d1) + diff.dot(&d2);
    if denominator.abs() < DERIVATIVE_EPSILON {
        return t;
    }

    let improved = t - numerator / denominator;
    if improved.is_finite() {
        improved.clamp(0.0, 1.0)
    } else {
        t
    }
}

/// Refine every `t` value with one Newton-Raphson step against `curve`.
pub fn reparameterize(curve: &CubicBezier, points: &[Point], t_values: &[f64]) -> Vec<f64> {
    points
        .iter()
        .zip(t_values)
        .map(|(point, &t)| newton_raphson_root_find(curve, point, t))
        .collect()
}
