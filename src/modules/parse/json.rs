//! JSON stroke recordings
//!
//! A stroke is an array of samples, each either an object `{"x": .., "y": ..}`
//! or a pair `[x, y]`. A recording bundles several strokes with an optional
//! tolerance:
//!
//! ```json
//! { "max_error": 2.0, "strokes": [[[0, 0], [10, 4]], [{"x": 5, "y": 5}, {"x": 9, "y": 1}]] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bezier_stroke::modules::parse::json::parse_stroke;
//! use bezier_stroke::Point;
//!
//! let stroke = parse_stroke(r#"[[0, 0], {"x": 10, "y": 4}]"#).unwrap();
//! assert_eq!(stroke, vec![Point::new(0.0, 0.0), Point::new(10.0, 4.0)]);
//! ```

use crate::data::Point;
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum Sample {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

impl From<Sample> for Point {
    fn from(sample: Sample) -> Self {
        match sample {
            Sample::Object { x, y } => Point::new(x, y),
            Sample::Pair([x, y]) => Point::new(x, y),
        }
    }
}

#[derive(Deserialize)]
struct RawRecording {
    #[serde(default)]
    max_error: Option<f64>,
    strokes: Vec<Vec<Sample>>,
}

/// Several recorded strokes, in drawing order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StrokeRecording {
    pub max_error: Option<f64>,
    pub strokes: Vec<Vec<Point>>,
}

fn into_stroke(samples: Vec<Sample>) -> BezierResult<Vec<Point>> {
    samples
        .into_iter()
        .enumerate()
        .map(|(i, sample)| {
            let point = Point::from(sample);
            if point.is_finite() {
                Ok(point)
            } else {
                Err(BezierError::ParseError(format!(
                    "sample {} has a non-finite coordinate",
                    i
                )))
            }
        })
        .collect()
}

/// Parse a single stroke.
pub fn parse_stroke(json: &str) -> BezierResult<Vec<Point>> {
    let samples: Vec<Sample> = serde_json::from_str(json)?;
    into_stroke(samples)
}

/// Parse a recording of several strokes.
pub fn parse_recording(json: &str) -> BezierResult<StrokeRecording> {
    let raw: RawRecording = serde_json::from_str(json)?;
    let strokes = raw
        .strokes
        .into_iter()
        .map(into_stroke)
        .collect::<BezierResult<Vec<_>>>()?;

    Ok(StrokeRecording {
        max_error: raw.max_error,
        strokes,
    })
}

impl StrokeRecording {
    pub fn to_json(&self) -> BezierResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
