use crate::common::{arc, assert_joined, wave, worst_sample_distance};
use bezier_stroke::modules::stroke::tail::StrokeSnapshot;
use bezier_stroke::modules::worker::FitWorker;
use bezier_stroke::{fit_curve, CubicBezier, FitConfig, Point, StrokeController, StrokeState};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn controller(max_error: f64) -> StrokeController {
    StrokeController::new(FitConfig::new(max_error).unwrap())
}

fn draw_and_release(controller: &mut StrokeController, stroke: &[Point]) -> Vec<CubicBezier> {
    controller.press(stroke[0]);
    for point in &stroke[1..] {
        controller.move_to(*point);
    }
    controller.release();
    controller.committed().to_vec()
}

#[test]
fn test_straight_stroke_matches_batch_fit() {
    let stroke: Vec<Point> = (0..50).map(|i| Point::new(i as f64 * 4.0, i as f64 * 2.0)).collect();
    let mut c = controller(2.0);

    let incremental = draw_and_release(&mut c, &stroke);
    assert_eq!(incremental, fit_curve(&stroke, 2.0).curves());
}

#[test]
fn test_curved_stroke_close_to_batch_fit() {
    // once curves are committed mid-stroke the anchors differ from a batch
    // fit, but both stay within tolerance and need a similar number of curves
    for stroke in [arc(60), wave(60)] {
        for &max_error in &[1.0, 4.0] {
            let mut c = controller(max_error);
            let incremental = draw_and_release(&mut c, &stroke);
            let batch = fit_curve(&stroke, max_error).curves();

            assert_eq!(incremental[0].start(), batch[0].start());
            assert_eq!(
                incremental[incremental.len() - 1].end(),
                batch[batch.len() - 1].end()
            );

            let anchors: Vec<Point> = incremental.iter().map(|curve| curve.end()).collect();
            let slack = max_error.sqrt() + 0.5;
            assert!(worst_sample_distance(&anchors, &batch) <= slack);
            assert!(worst_sample_distance(&stroke, &incremental) <= slack);

            assert!(
                incremental.len() <= 2 * batch.len() + 1 && batch.len() <= 2 * incremental.len() + 1,
                "{} incremental curves against {} batch curves",
                incremental.len(),
                batch.len()
            );
        }
    }
}

#[test]
fn test_incremental_stroke_is_continuous() {
    for stroke in [arc(60), wave(60)] {
        let mut c = controller(1.0);
        let curves = draw_and_release(&mut c, &stroke);

        assert!(!curves.is_empty());
        assert_eq!(curves[0].start(), stroke[0]);
        assert_eq!(curves[curves.len() - 1].end(), stroke[stroke.len() - 1]);
        assert_joined(&curves);
        assert_eq!(c.state(), StrokeState::Idle);
    }
}

#[test]
fn test_anchors_are_input_samples() {
    let stroke = wave(60);
    let mut c = controller(0.5);
    let curves = draw_and_release(&mut c, &stroke);

    for curve in &curves {
        assert!(stroke.contains(&curve.start()));
        assert!(stroke.contains(&curve.end()));
    }
}

#[test]
fn test_incremental_stroke_within_tolerance() {
    for &max_error in &[1.0, 4.0] {
        let stroke = arc(60);
        let mut c = controller(max_error);
        let curves = draw_and_release(&mut c, &stroke);

        let worst = worst_sample_distance(&stroke, &curves);
        assert!(worst <= max_error.sqrt() + 0.5, "worst deviation {}", worst);
    }
}

#[test]
fn test_reduced_rate_after_release() {
    let stroke = arc(60);
    let mut c = controller(1.0);
    draw_and_release(&mut c, &stroke);

    assert_eq!(c.drop_count(), stroke.len());
    assert_eq!(c.point_length(), 0);
    let rate = c.reduced_rate();
    assert!(rate > 0.0 && rate < 1.0, "reduced rate {}", rate);
}

#[test]
fn test_worker_driven_stroke_matches_synchronous() {
    let stroke = arc(60);
    let mut sync = controller(0.5);
    let expected = draw_and_release(&mut sync, &stroke);

    let worker = FitWorker::spawn();
    let mut deferred = controller(0.5);
    deferred.press(stroke[0]);
    for point in &stroke[1..] {
        assert!(deferred.push_sample(*point));
        if let Some(request) = deferred.take_fit_request() {
            worker.submit(request).unwrap();
            assert!(deferred.apply_fit(worker.recv().unwrap()));
        }
    }
    deferred.release();

    assert_eq!(deferred.committed(), expected.as_slice());
}

#[test]
fn test_lagging_worker_keeps_every_sample() {
    let stroke = wave(60);
    let worker = FitWorker::spawn();
    let mut c = controller(1.0);
    c.press(stroke[0]);

    // samples keep arriving while a fit is in flight
    for (i, point) in stroke[1..].iter().enumerate() {
        c.push_sample(*point);
        if i % 5 == 0 {
            if let Some(request) = c.take_fit_request() {
                worker.submit(request).unwrap();
            }
        }
        if i % 5 == 3 {
            if let Ok(response) = worker.recv() {
                c.apply_fit(response);
            }
        }
        assert_eq!(c.drop_count() + c.point_length(), i + 2);
    }

    let curves = c.release();
    assert_eq!(c.drop_count(), stroke.len());
    assert_eq!(curves.start(), Some(stroke[0]));
    assert_eq!(curves.end(), Some(stroke[stroke.len() - 1]));
    assert_joined(c.committed());
}

#[test]
fn test_response_for_previous_stroke_is_rejected() {
    let worker = FitWorker::spawn();
    let mut c = controller(1.0);
    let first = arc(20);
    c.press(first[0]);
    for point in &first[1..] {
        c.push_sample(*point);
    }
    worker.submit(c.take_fit_request().unwrap()).unwrap();

    c.press(Point::new(500.0, 500.0));
    c.push_sample(Point::new(510.0, 500.0));

    assert!(!c.apply_fit(worker.recv().unwrap()));
    assert_eq!(c.curve_count(), 0);
    assert_eq!(c.path(), &[Point::new(500.0, 500.0), Point::new(510.0, 500.0)]);
}

#[test]
fn test_snapshot_while_drawing() {
    let stroke = wave(40);
    let mut c = controller(1.0);
    c.press(stroke[0]);
    for point in &stroke[1..] {
        c.move_to(*point);
    }

    let mut rng = StdRng::seed_from_u64(5);
    let snapshot = StrokeSnapshot::capture(&c, &mut rng);
    assert_eq!(snapshot.metrics, c.metrics());
    assert_eq!(snapshot.points, c.path());

    let whole = snapshot.full_curve();
    assert_eq!(whole.start(), Some(stroke[0]));
    assert_eq!(whole.end(), Some(stroke[stroke.len() - 1]));
}
