//! Previews of the stroke tail that has not been committed yet, and the
//! snapshot a renderer reads every frame.
//!
//! None of this feeds back into the controller: the reduced-sample preview in
//! particular is a diagnostic that fits a randomly thinned copy of the tail.

use crate::constants::MAX_DROPPED_SAMPLES;
use crate::data::{BezierCurve, BezierSegment, Point};
use crate::error::BezierResult;
use crate::modules::fit::recursive_fit::fit_curve;
use crate::modules::stroke::config::TailDisplay;
use crate::modules::stroke::controller::{StrokeController, StrokeMetrics};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Quadratic smoothing of a raw polyline.
///
/// Runs a line to the midpoint of the first edge, then one quadratic per
/// interior sample with the sample as control point, ending on the midpoint of
/// the next edge, and a line to the last sample.
pub fn rough_polyline(points: &[Point]) -> BezierCurve {
    if points.len() < 2 {
        return BezierCurve::default();
    }

    let mut segments = Vec::with_capacity(points.len() + 1);
    let mut current = points[0].midpoint(&points[1]);
    segments.push(BezierSegment::line(points[0], current));
    for w in points[1..].windows(2) {
        let to = w[0].midpoint(&w[1]);
        segments.push(BezierSegment::quadratic(current, w[0], to));
        current = to;
    }
    segments.push(BezierSegment::line(current, points[points.len() - 1]));

    BezierCurve::new(segments)
}

/// Remove up to [`MAX_DROPPED_SAMPLES`] random interior samples; the ends are always kept.
pub fn drop_random_samples<R: Rng + ?Sized>(points: &[Point], rng: &mut R) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let interior = points.len() - 2;
    let amount = rng.gen_range(0..=MAX_DROPPED_SAMPLES.min(interior));
    let mut keep = vec![true; points.len()];
    for i in index::sample(rng, interior, amount) {
        keep[i + 1] = false;
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(point, kept)| kept.then_some(*point))
        .collect()
}

/// Render the controller's unconsumed tail in the given display mode.
pub fn preview_tail<R: Rng + ?Sized>(
    controller: &StrokeController,
    mode: TailDisplay,
    rng: &mut R,
) -> BezierCurve {
    match mode {
        TailDisplay::RoughPolyline => rough_polyline(controller.path()),
        TailDisplay::LastFit => controller
            .active()
            .map(|curve| BezierCurve::from_segment(&BezierSegment::from(*curve)))
            .unwrap_or_default(),
        TailDisplay::ReducedSample => {
            let reduced = drop_random_samples(controller.path(), rng);
            fit_curve(&reduced, controller.config().max_error()).to_bezier_curve()
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeSnapshot {
    pub committed: BezierCurve,
    pub tail: BezierCurve,
    /// Raw samples of the working buffer
    pub points: Vec<Point>,
    pub show_points: bool,
    pub metrics: StrokeMetrics,
}

impl StrokeSnapshot {
    /// Capture the controller's state, previewing the tail as its config asks.
    pub fn capture<R: Rng + ?Sized>(controller: &StrokeController, rng: &mut R) -> Self {
        let config = controller.config();
        Self {
            committed: BezierCurve::from_cubics(controller.committed()),
            tail: preview_tail(controller, config.tail_display, rng),
            points: controller.path().to_vec(),
            show_points: config.show_points,
            metrics: controller.metrics(),
        }
    }

    /// Committed curves followed by the tail preview.
    pub fn full_curve(&self) -> BezierCurve {
        let mut curve = self.committed.clone();
        curve.extend(self.tail.clone());
        curve
    }

    pub fn to_json(&self) -> BezierResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::stroke::config::FitConfig;
    use crate::path;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rough_polyline_shape() {
        let points = path![(0, 0), (10, 0), (10, 10), (20, 10)];
        let curve = rough_polyline(&points);

        assert_eq!(curve.len(), 4);
        assert_eq!(curve.segments[0], BezierSegment::line(pt(0, 0), pt(5, 0)));
        assert_eq!(
            curve.segments[1],
            BezierSegment::quadratic(pt(5, 0), pt(10, 0), pt(10, 5))
        );
        assert_eq!(
            curve.segments[2],
            BezierSegment::quadratic(pt(10, 5), pt(10, 10), pt(15, 10))
        );
        assert_eq!(curve.segments[3], BezierSegment::line(pt(15, 10), pt(20, 10)));
    }

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x as f64, y as f64)
    }

    #[test]
    fn test_rough_polyline_too_short() {
        assert!(rough_polyline(&path![(1, 1)]).is_empty());
    }

    #[test]
    fn test_drop_random_samples_keeps_ends() {
        let points: Vec<Point> = (0..10).map(|i| pt(i, i * 2)).collect();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let reduced = drop_random_samples(&points, &mut rng);
            assert!(reduced.len() >= points.len() - MAX_DROPPED_SAMPLES);
            assert!(reduced.len() <= points.len());
            assert_eq!(reduced[0], points[0]);
            assert_eq!(reduced[reduced.len() - 1], points[9]);
            // order is preserved
            assert!(reduced.windows(2).all(|w| w[0].x < w[1].x));
        }
    }

    #[test]
    fn test_drop_random_samples_short_input() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = path![(0, 0), (5, 5)];
        assert_eq!(drop_random_samples(&points, &mut rng), points);
    }

    #[test]
    fn test_snapshot_modes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut controller = StrokeController::new(FitConfig::new(1.0).unwrap());
        controller.press(pt(0, 0));
        for i in 1..10 {
            controller.move_to(pt(i * 10, 0));
        }

        let snapshot = StrokeSnapshot::capture(&controller, &mut rng);
        assert_eq!(snapshot.tail.len(), 1);
        assert_eq!(snapshot.points.len(), 10);
        assert_eq!(snapshot.metrics.point_length, 10);

        controller.config_mut().tail_display = TailDisplay::RoughPolyline;
        let snapshot = StrokeSnapshot::capture(&controller, &mut rng);
        assert_eq!(snapshot.tail.len(), 10);

        controller.config_mut().tail_display = TailDisplay::ReducedSample;
        let snapshot = StrokeSnapshot::capture(&controller, &mut rng);
        assert_eq!(snapshot.tail.start(), Some(pt(0, 0)));
        assert_eq!(snapshot.tail.end(), Some(pt(90, 0)));
        assert!(snapshot.to_json().unwrap().contains("\"metrics\""));
    }
}
