//! Fit a sequence of cubic bezier curves to a stroke within an error bound
//!
//! The range is fitted with a single cubic first. If the squared deviation of
//! some sample stays above `max_error` even after a few rounds of
//! Newton-Raphson reparameterization, the range is split at the worst sample
//! and both halves are fitted recursively. The halves share the split sample,
//! and their tangents there are negations of each other, so the result is C0
//! and G1 continuous.
//!
//! Every split is interior, so each recursive call sees a strictly shorter
//! range and the recursion ends after at most `n - 1` curves.
//!
//! # Example
//!
//! ```rust
//! use bezier_stroke::{fit_curve, path};
//!
//! let stroke = path![(0, 0), (10, 0), (10, 10), (20, 10)];
//!
//! let outcome = fit_curve(&stroke, 0.0);
//! let curves = outcome.curves();
//!
//! assert!(curves.len() >= 2);
//! assert_eq!(curves[0].start(), stroke[0]);
//! assert_eq!(curves[curves.len() - 1].end(), stroke[3]);
//! ```

use crate::constants::MAX_REPARAMETERIZE_ITERATIONS;
use crate::data::{BezierCurve, CubicBezier, Point};
use crate::error::{BezierError, BezierResult};
use crate::modules::fit::least_square_fit::{
    compute_max_error, fit_cubic_with_tangents, heuristic_cubic,
};
use crate::modules::fit::newton_raphson::reparameterize;
use crate::modules::fit::t_heuristic::{estimate_t_values_with_heuristic, polyline_length, THeuristic};
use crate::modules::fit::tangent::{center_tangent, left_tangent, right_tangent};
use log::trace;

/// One accepted curve together with the input range it was fitted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedSpan {
    pub curve: CubicBezier,
    /// Index of the first input point covered by the curve
    pub start: usize,
    /// Index of the last input point covered by the curve (inclusive)
    pub end: usize,
    /// Maximum squared deviation measured when the curve was accepted
    pub error: f64,
}

/// Result of [`fit_curve`]: the accepted curves in stroke order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FitOutcome {
    pub spans: Vec<FittedSpan>,
}

impl FitOutcome {
    pub fn curves(&self) -> Vec<CubicBezier> {
        self.spans.iter().map(|span| span.curve).collect()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Index into the input at which the final curve begins, 0 when nothing was fitted.
    ///
    /// Every point before it is covered only by the curves preceding the final one.
    pub fn last_start(&self) -> usize {
        self.spans.last().map_or(0, |span| span.start)
    }

    pub fn to_bezier_curve(&self) -> BezierCurve {
        BezierCurve::from_cubics(&self.curves())
    }
}

/// Fit `points` with as few cubic curves as the greedy subdivision finds, each
/// deviating from its samples by at most `max_error` (squared distance).
///
/// Fewer than two points yield an empty outcome.
pub fn fit_curve(points: &[Point], max_error: f64) -> FitOutcome {
    fit_curve_with_tangents(points, Point::ZERO, max_error)
}

/// Like [`fit_curve`], with the direction of travel at the first point given.
///
/// Continuing a stroke after already fitted curves, passing the end direction
/// of the last of them keeps the join tangent continuous. A zero
/// `start_tangent` falls back to the direction of the first two points.
pub fn fit_curve_with_tangents(
    points: &[Point],
    start_tangent: Point,
    max_error: f64,
) -> FitOutcome {
    let mut outcome = FitOutcome::default();
    if points.len() < 2 {
        return outcome;
    }

    let tan1 = if start_tangent.is_zero() {
        left_tangent(points)
    } else {
        start_tangent.normalize()
    };
    fit_range(
        points,
        0,
        tan1,
        right_tangent(points),
        max_error,
        &mut outcome.spans,
    );
    outcome
}

fn fit_range(
    points: &[Point],
    offset: usize,
    tan1: Point,
    tan2: Point,
    max_error: f64,
    spans: &mut Vec<FittedSpan>,
) {
    let n = points.len();
    let first = points[0];
    let last = points[n - 1];
    let mut accept = |curve: CubicBezier, error: f64| {
        spans.push(FittedSpan {
            curve,
            start: offset,
            end: offset + n - 1,
            error,
        })
    };

    if n == 2 {
        accept(heuristic_cubic(first, last, tan1, tan2), 0.0);
        return;
    }
    if polyline_length(points) == 0.0 {
        accept(CubicBezier::degenerate(first), 0.0);
        return;
    }

    let split_hint = match fit_single(points, tan1, tan2, max_error) {
        Ok((curve, error)) => {
            accept(curve, error);
            return;
        }
        Err(BezierError::NonConvergentFit { index, .. }) => index,
        Err(_) => n / 2,
    };

    // never split at an end, both halves need at least two points
    let split = split_hint.clamp(1, n - 2);
    let center = center_tangent(points, split);
    trace!(
        "splitting points {}..={} at {}",
        offset,
        offset + n - 1,
        offset + split
    );

    fit_range(&points[..=split], offset, tan1, center, max_error, spans);
    fit_range(&points[split..], offset + split, -center, tan2, max_error, spans);
}

/// Fit a single cubic to the whole range, reparameterizing until it is within tolerance.
fn fit_single(
    points: &[Point],
    tan1: Point,
    tan2: Point,
    max_error: f64,
) -> BezierResult<(CubicBezier, f64)> {
    let mut t_values = estimate_t_values_with_heuristic(points, THeuristic::ChordLength);
    let mut curve = fit_cubic_with_tangents(points, &t_values, tan1, tan2)?;
    let (mut error, mut worst) = compute_max_error(points, &t_values, &curve);
    if error <= max_error {
        return Ok((curve, error));
    }

    for _ in 0..MAX_REPARAMETERIZE_ITERATIONS {
        t_values = reparameterize(&curve, points, &t_values);
        curve = fit_cubic_with_tangents(points, &t_values, tan1, tan2)?;
        (error, worst) = compute_max_error(points, &t_values, &curve);
        if error <= max_error {
            return Ok((curve, error));
        }
    }

    Err(BezierError::NonConvergentFit {
        max_error: error,
        index: worst,
    })
}
