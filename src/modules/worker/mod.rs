//! Offloading fits to a background thread
//!
//! Requests and responses are plain serializable messages tagged with the
//! controller's generation, so they can also cross a process boundary as JSON.
//! A response whose generation no longer matches is dropped by
//! [`StrokeController::apply_fit`](crate::modules::stroke::controller::StrokeController::apply_fit).

pub mod message;
pub mod thread;

pub use message::{FitRequest, FitResponse};
pub use thread::FitWorker;
