//! Fitting cubic bezier curves to sampled stroke points
//!
//! The pieces, leaf to root:
//! - [`t_heuristic`]: initial parameter guess for every sample
//! - [`tangent`]: unit tangents at the ends of a range and at split points
//! - [`least_square_fit`]: single cubic from fixed end tangents, plus the error metric
//! - [`newton_raphson`]: parameter refinement against a fitted cubic
//! - [`recursive_fit`]: error driven subdivision into a cubic sequence

pub mod least_square_fit;
pub mod newton_raphson;
pub mod recursive_fit;
pub mod t_heuristic;
pub mod tangent;
