use crate::data::{CubicBezier, Point};
use crate::error::BezierResult;
use crate::modules::fit::recursive_fit::fit_curve_with_tangents;
use serde::{Deserialize, Serialize};

/// A snapshot of the working buffer handed off for fitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitRequest {
    pub generation: u64,
    pub points: Vec<Point>,
    /// End direction of the last committed curve, zero at the start of a stroke
    #[serde(default)]
    pub start_tangent: Point,
    pub max_error: f64,
}

/// The fitted curves for a [`FitRequest`], carrying its generation back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResponse {
    pub generation: u64,
    pub curves: Vec<CubicBezier>,
    /// Index into the request's points at which the final curve begins
    pub last_start: usize,
}

impl FitRequest {
    pub fn run(&self) -> FitResponse {
        let outcome = fit_curve_with_tangents(&self.points, self.start_tangent, self.max_error);
        FitResponse {
            generation: self.generation,
            curves: outcome.curves(),
            last_start: outcome.last_start(),
        }
    }

    pub fn to_json(&self) -> BezierResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> BezierResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FitResponse {
    pub fn to_json(&self) -> BezierResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> BezierResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
