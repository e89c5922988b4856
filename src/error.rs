use thiserror::Error;

/// Errors produced while fitting strokes or configuring the engine.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BezierError {
    #[error("at least 2 points are required for fitting, got {0}")]
    InsufficientPoints(usize),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("fit did not converge: max error {max_error} at index {index}")]
    NonConvergentFit { max_error: f64, index: usize },

    #[error("max error must be finite and non-negative, got {0}")]
    InvalidMaxError(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("fit worker disconnected")]
    WorkerDisconnected,

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BezierResult<T> = Result<T, BezierError>;
