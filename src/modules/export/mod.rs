//! Export fitted strokes to formats a renderer can consume
//!
//! # Available Export Formats
//!
//! - [SVG path data](svg_path/index.html) - the `d` attribute of a path element
//! - [SVG documents](svg/index.html) - strokes and sample points as a full SVG

pub mod svg;
pub mod svg_path;
