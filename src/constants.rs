//! Numeric constants shared by the fitting engine and the stroke controller.

/// Number of Newton-Raphson reparameterization rounds tried before a range is split.
pub const MAX_REPARAMETERIZE_ITERATIONS: usize = 4;

/// Tangent magnitudes below this fraction of the chord length are rejected.
pub const ALPHA_EPSILON_RATIO: f64 = 1e-6;

/// Determinant magnitude under which the 2x2 normal equations count as singular.
pub const DETERMINANT_EPSILON: f64 = 1e-12;

/// Newton-Raphson denominator magnitude under which a parameter is left unchanged.
pub const DERIVATIVE_EPSILON: f64 = 1e-12;

/// Default squared-distance tolerance.
pub const DEFAULT_MAX_ERROR: f64 = 5.0;

/// Default upper bound on unconsumed samples held by the controller.
pub const DEFAULT_MAX_BUFFER_LEN: usize = 256;

/// Interior samples removed at most by the reduced-sample tail preview.
pub const MAX_DROPPED_SAMPLES: usize = 3;
