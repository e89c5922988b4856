//! Heuristics for the initial `t` parameter of every sample point.

use crate::data::Point;

/// How to assign each sample a parameter in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum THeuristic {
    /// Evenly spaced by index
    Uniform,
    /// Proportional to the cumulative distance along the polyline
    #[default]
    ChordLength,
}

/// Total length of the polyline through `points`.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

fn uniform(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}

fn chord_length(points: &[Point]) -> Vec<f64> {
    let total = polyline_length(points);
    if total == 0.0 || !total.is_finite() {
        // every point coincides, so distance carries no information
        return uniform(points.len());
    }

    let mut t_values = Vec::with_capacity(points.len());
    let mut acc = 0.0;
    t_values.push(0.0);
    for w in points.windows(2) {
        acc += w[0].distance(&w[1]);
        t_values.push(acc / total);
    }
    // pin the end exactly, the running sum can drift by an ulp
    if let Some(last) = t_values.last_mut() {
        *last = 1.0;
    }
    t_values
}

/// Estimate a `t` value for each point with the given heuristic.
pub fn estimate_t_values_with_heuristic(points: &[Point], heuristic: THeuristic) -> Vec<f64> {
    match heuristic {
        THeuristic::Uniform => uniform(points.len()),
        THeuristic::ChordLength => chord_length(points),
    }
}
