//! Incremental stroke fitting
//!
//! The controller keeps a working buffer of samples that are not yet covered
//! by a committed curve, and refits the whole buffer after every new sample.
//! When a fit needs more than one curve, everything but the last curve is
//! final: those curves are committed and the samples before the last curve's
//! start are dropped from the buffer. The last curve stays *active*, a
//! speculative preview that is replaced on the next sample. On release the
//! remaining buffer is fitted once more and every resulting curve is
//! committed.
//!
//! The buffer always starts on the end anchor of the last committed curve, and
//! its fits start in that curve's end direction, so commits keep the stroke
//! tangent continuous.
//!
//! Committing keeps the buffer, and so the cost of each refit, proportional to
//! the unresolved tail instead of the whole stroke. `max_buffer_len` caps it
//! for strokes a single curve keeps matching (long straight lines).
//!
//! ```text
//! Idle --press--> Drawing --move--> Drawing --release--> Idle
//!                    ^--------------press-----------------'
//! ```
//!
//! # Example
//!
//! ```rust
//! use bezier_stroke::{FitConfig, Point, StrokeController};
//!
//! let mut controller = StrokeController::new(FitConfig::new(1.0).unwrap());
//! controller.press(Point::new(0.0, 0.0));
//! for i in 1..=20 {
//!     controller.move_to(Point::new(i as f64 * 5.0, 0.0));
//! }
//! let stroke = controller.release();
//!
//! assert_eq!(stroke.start(), Some(Point::new(0.0, 0.0)));
//! assert_eq!(stroke.end(), Some(Point::new(100.0, 0.0)));
//! assert_eq!(controller.point_length(), 0);
//! ```

use crate::data::{BezierCurve, CubicBezier, Point};
use crate::error::BezierResult;
use crate::modules::fit::recursive_fit::{fit_curve_with_tangents, FitOutcome};
use crate::modules::stroke::config::FitConfig;
use crate::modules::worker::message::{FitRequest, FitResponse};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing,
}

/// Counters exposed for observability. None of them feed back into fitting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StrokeMetrics {
    /// Committed curves in the current stroke
    pub curve_count: usize,
    /// Samples in the working buffer
    pub point_length: usize,
    /// Samples consumed into committed curves
    pub drop_count: usize,
    /// `1 - curve_count / drop_count`, 0 before anything is consumed
    pub reduced_rate: f64,
}

/// Share of consumed samples saved by storing curves instead.
pub fn reduced_rate(curve_count: usize, drop_count: usize) -> f64 {
    if drop_count == 0 {
        0.0
    } else {
        1.0 - curve_count as f64 / drop_count as f64
    }
}

#[derive(Debug, Clone, Default)]
pub struct StrokeController {
    config: FitConfig,
    state: StrokeState,
    path: Vec<Point>,
    committed: Vec<CubicBezier>,
    active: Option<CubicBezier>,
    drop_count: usize,
    /// End direction of the last committed curve, zero before the first commit
    start_tangent: Point,
    generation: u64,
    /// Buffer length handed off with the outstanding request
    pending: Option<usize>,
}

impl StrokeController {
    pub fn new(config: FitConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FitConfig {
        &mut self.config
    }

    /// Change the tolerance for future fits; committed curves are not refitted.
    pub fn set_max_error(&mut self, max_error: f64) -> BezierResult<()> {
        self.config.set_max_error(max_error)
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    /// Advances on every press and release; tags fit requests.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Samples not yet consumed by a committed curve.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn committed(&self) -> &[CubicBezier] {
        &self.committed
    }

    pub fn active(&self) -> Option<&CubicBezier> {
        self.active.as_ref()
    }

    pub fn curve_count(&self) -> usize {
        self.committed.len()
    }

    pub fn point_length(&self) -> usize {
        self.path.len()
    }

    pub fn drop_count(&self) -> usize {
        self.drop_count
    }

    pub fn reduced_rate(&self) -> f64 {
        reduced_rate(self.curve_count(), self.drop_count)
    }

    pub fn metrics(&self) -> StrokeMetrics {
        StrokeMetrics {
            curve_count: self.curve_count(),
            point_length: self.point_length(),
            drop_count: self.drop_count,
            reduced_rate: self.reduced_rate(),
        }
    }

    pub fn is_fit_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a new stroke, discarding whatever the previous one left behind.
    pub fn press(&mut self, point: Point) {
        self.generation += 1;
        self.state = StrokeState::Drawing;
        self.path.clear();
        self.path.push(point);
        self.committed.clear();
        self.active = None;
        self.drop_count = 0;
        self.start_tangent = Point::ZERO;
        self.pending = None;
    }

    /// Append a sample and refit the working buffer.
    ///
    /// Ignored while idle. While a deferred fit is outstanding the sample is
    /// only appended; it is picked up by the next request.
    pub fn move_to(&mut self, point: Point) {
        if !self.push_sample(point) || self.pending.is_some() {
            return;
        }

        let covered = self.path.len();
        let outcome = self.fit_buffer();
        self.apply_outcome(outcome.curves(), outcome.last_start(), covered);
    }

    /// Append a sample without fitting. Returns `false` while idle.
    pub fn push_sample(&mut self, point: Point) -> bool {
        if self.state != StrokeState::Drawing {
            return false;
        }
        self.path.push(point);
        true
    }

    /// Hand off the working buffer for fitting elsewhere.
    ///
    /// Returns `None` while idle, while another request is outstanding, or when
    /// there is nothing to fit yet. Until the matching response is applied the
    /// handed-off samples stay untouched; new samples are only appended.
    pub fn take_fit_request(&mut self) -> Option<FitRequest> {
        if self.state != StrokeState::Drawing || self.pending.is_some() || self.path.len() < 2 {
            return None;
        }
        self.pending = Some(self.path.len());
        Some(FitRequest {
            generation: self.generation,
            points: self.path.clone(),
            start_tangent: self.start_tangent,
            max_error: self.config.max_error(),
        })
    }

    /// Apply a deferred fit. Returns `false` and changes nothing when the
    /// response is stale (another press or a release happened since) or does
    /// not match the outstanding request.
    pub fn apply_fit(&mut self, response: FitResponse) -> bool {
        if response.generation != self.generation {
            warn!(
                "discarding fit response for generation {}, current is {}",
                response.generation, self.generation
            );
            return false;
        }
        let Some(covered) = self.pending else {
            warn!("discarding unrequested fit response");
            return false;
        };
        // the last of several curves starts strictly inside the handed-off samples
        if response.curves.len() > 1
            && (response.last_start == 0 || response.last_start >= covered)
        {
            warn!(
                "discarding fit response starting its last curve at {} of {} points",
                response.last_start, covered
            );
            return false;
        }

        self.pending = None;
        self.apply_outcome(response.curves, response.last_start, covered);
        true
    }

    /// Fit what is left, commit all of it and go idle.
    ///
    /// Returns the whole stroke. Any outstanding deferred fit becomes stale.
    pub fn release(&mut self) -> BezierCurve {
        if self.state != StrokeState::Drawing {
            return BezierCurve::default();
        }
        self.generation += 1;
        self.state = StrokeState::Idle;
        self.pending = None;
        self.active = None;

        let outcome = self.fit_buffer();
        // a lone leftover sample is the end anchor of the last committed curve
        if !outcome.is_empty() || !self.committed.is_empty() {
            self.drop_count += self.path.len();
        }
        self.committed.extend(outcome.curves());
        debug!(
            "stroke released: {} curves from {} consumed points",
            self.committed.len(),
            self.drop_count
        );
        self.path.clear();

        BezierCurve::from_cubics(&self.committed)
    }

    fn fit_buffer(&self) -> FitOutcome {
        fit_curve_with_tangents(&self.path, self.start_tangent, self.config.max_error())
    }

    /// Commit the stable prefix of a fit over the first `covered` buffer samples.
    fn apply_outcome(&mut self, curves: Vec<CubicBezier>, last_start: usize, covered: usize) {
        let Some((last, stable)) = curves.split_last() else {
            self.active = None;
            return;
        };

        // the curve that stays active spans buffer[..tail_len] after the drain
        let mut tail_len = covered;
        if !stable.is_empty() {
            self.committed.extend_from_slice(stable);
            self.start_tangent = stable[stable.len() - 1].end_direction();
            self.drop_count += last_start;
            self.path.drain(..last_start);
            tail_len -= last_start;
            debug!(
                "committed {} curves, {} points left in buffer",
                stable.len(),
                self.path.len()
            );
        }
        self.active = Some(*last);

        if self.path.len() > self.config.max_buffer_len() {
            // keep the shared end anchor so the next curve joins this one
            self.committed.push(*last);
            self.start_tangent = last.end_direction();
            self.active = None;
            self.drop_count += tail_len - 1;
            self.path.drain(..tail_len - 1);
            debug!(
                "buffer limit {} reached, committed the active curve",
                self.config.max_buffer_len()
            );
        }
    }
}
