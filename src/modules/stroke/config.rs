use crate::constants::{DEFAULT_MAX_BUFFER_LEN, DEFAULT_MAX_ERROR};
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};

/// Settings for live stroke fitting.
///
/// Serializable, so presets can be stored as JSON, and adjustable at runtime
/// (for a tolerance slider or a debug toggle). Only `max_error` and
/// `max_buffer_len` influence fitting; the other fields are read by renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Squared-distance tolerance between a sample and its fitted curve.
    max_error: f64,
    /// Draw the raw samples on top of the curves.
    pub show_points: bool,
    /// How to preview the tail that has not been committed yet.
    pub tail_display: TailDisplay,
    /// A speculative curve covering more samples than this is committed as is.
    max_buffer_len: usize,
}

/// Preview of the unconsumed tail of a stroke being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TailDisplay {
    /// Smoothed polyline through the raw samples, no fitting involved.
    RoughPolyline,
    /// The active curve from the latest fit.
    #[default]
    LastFit,
    /// A fit of the tail with a few random interior samples removed.
    ReducedSample,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_error: DEFAULT_MAX_ERROR,
            show_points: false,
            tail_display: TailDisplay::default(),
            max_buffer_len: DEFAULT_MAX_BUFFER_LEN,
        }
    }
}

fn validate_max_buffer_len(max_buffer_len: usize) -> BezierResult<usize> {
    if max_buffer_len < 2 {
        return Err(BezierError::InvalidConfig(format!(
            "max_buffer_len must be at least 2, got {}",
            max_buffer_len
        )));
    }
    Ok(max_buffer_len)
}

/// Reject negative, NaN and infinite tolerances.
pub fn validate_max_error(max_error: f64) -> BezierResult<f64> {
    if max_error.is_finite() && max_error >= 0.0 {
        Ok(max_error)
    } else {
        Err(BezierError::InvalidMaxError(max_error))
    }
}

impl FitConfig {
    pub fn new(max_error: f64) -> BezierResult<Self> {
        Ok(Self {
            max_error: validate_max_error(max_error)?,
            ..Self::default()
        })
    }

    /// Parse a JSON preset; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> BezierResult<Self> {
        let config: FitConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> BezierResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> BezierResult<()> {
        validate_max_error(self.max_error)?;
        validate_max_buffer_len(self.max_buffer_len)?;
        Ok(())
    }

    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Change the tolerance for future fits. Already committed curves are kept as they are.
    pub fn set_max_error(&mut self, max_error: f64) -> BezierResult<()> {
        self.max_error = validate_max_error(max_error)?;
        Ok(())
    }

    pub fn max_buffer_len(&self) -> usize {
        self.max_buffer_len
    }

    /// Takes effect with the next sample; a longer buffer is not trimmed right away.
    pub fn set_max_buffer_len(&mut self, max_buffer_len: usize) -> BezierResult<()> {
        self.max_buffer_len = validate_max_buffer_len(max_buffer_len)?;
        Ok(())
    }
}
