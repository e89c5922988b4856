use crate::error::{BezierError, BezierResult};
use crate::modules::worker::message::{FitRequest, FitResponse};
use log::trace;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// A background thread answering [`FitRequest`]s in the order they are submitted.
///
/// Dropping the worker closes the request channel and joins the thread.
pub struct FitWorker {
    requests: Option<Sender<FitRequest>>,
    responses: Receiver<FitResponse>,
    handle: Option<JoinHandle<()>>,
}

impl FitWorker {
    pub fn spawn() -> Self {
        let (request_tx, request_rx) = mpsc::channel::<FitRequest>();
        let (response_tx, response_rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            for request in request_rx {
                trace!(
                    "fitting {} points for generation {}",
                    request.points.len(),
                    request.generation
                );
                if response_tx.send(request.run()).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: Some(request_tx),
            responses: response_rx,
            handle: Some(handle),
        }
    }

    pub fn submit(&self, request: FitRequest) -> BezierResult<()> {
        self.requests
            .as_ref()
            .ok_or(BezierError::WorkerDisconnected)?
            .send(request)
            .map_err(|_| BezierError::WorkerDisconnected)
    }

    /// Block until the next response arrives.
    pub fn recv(&self) -> BezierResult<FitResponse> {
        self.responses
            .recv()
            .map_err(|_| BezierError::WorkerDisconnected)
    }

    /// The next response if one is ready.
    pub fn try_recv(&self) -> Option<FitResponse> {
        self.responses.try_recv().ok()
    }
}

impl Drop for FitWorker {
    fn drop(&mut self) {
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Point;
    use crate::path;

    #[test]
    fn test_round_trip_through_thread() {
        let worker = FitWorker::spawn();
        let request = FitRequest {
            generation: 1,
            points: path![(0, 0), (10, 0), (10, 10), (20, 10)],
            start_tangent: Point::ZERO,
            max_error: 0.0,
        };
        let expected = request.run();

        worker.submit(request).unwrap();
        assert_eq!(worker.recv().unwrap(), expected);
    }

    #[test]
    fn test_responses_keep_submission_order() {
        let worker = FitWorker::spawn();
        for generation in 0..5 {
            worker
                .submit(FitRequest {
                    generation,
                    points: path![(0, 0), (5, 5), (10, 0)],
                    start_tangent: Point::ZERO,
                    max_error: 1.0,
                })
                .unwrap();
        }
        let generations: Vec<u64> = (0..5).map(|_| worker.recv().unwrap().generation).collect();
        assert_eq!(generations, vec![0, 1, 2, 3, 4]);
    }
}
