//! Parsing module for recorded strokes
//!
//! Now supported format:
//! - JSON:
//!     a single stroke as `[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}]` or `[[0.0, 0.0], [1.0, 1.0]]`,
//!     or a recording of several strokes. See the `json` module for details.

pub mod json;
