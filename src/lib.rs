// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::cubic::CubicBezier;
pub use data::curve::BezierCurve;
pub use data::point::Point;
pub use data::segment::BezierSegment;
pub use error::{BezierError, BezierResult};
pub use modules::fit::recursive_fit::{fit_curve, fit_curve_with_tangents, FitOutcome};
pub use modules::stroke::config::{FitConfig, TailDisplay};
pub use modules::stroke::controller::{StrokeController, StrokeState};
