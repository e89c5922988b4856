use crate::common::{arc, assert_joined, noisy_samples, wave, worst_sample_distance};
use bezier_stroke::modules::export::svg;
use bezier_stroke::modules::export::svg_path::ToSvgPath;
use bezier_stroke::modules::parse::json::parse_stroke;
use bezier_stroke::{cubic, fit_curve, path, BezierCurve};

#[test]
fn test_complete_workflow() {
    let original = cubic!([
        (50.0, 200.0),  // Start point
        (100.0, 50.0),  // Control point 1
        (200.0, 50.0),  // Control point 2
        (250.0, 200.0)  // End point
    ]);
    let points = noisy_samples(&original, 40, 0.5, 11);

    let curves = fit_curve(&points, 4.0).curves();
    assert!(!curves.is_empty());
    assert_eq!(curves[0].start(), points[0]);
    assert_eq!(curves[curves.len() - 1].end(), points[points.len() - 1]);
    assert_joined(&curves);

    let path_data = curves.to_svg_path();
    assert!(path_data.starts_with("M"));
    assert_eq!(path_data.matches('C').count(), curves.len());

    let document = svg::to_svg(&BezierCurve::from_cubics(&curves), 300, 300);
    assert!(document.contains(&path_data));
}

#[test]
fn test_recorded_stroke_round_trip() {
    let stroke = parse_stroke(r#"[[0, 0], [10, 0], [10, 10], [20, 10]]"#).unwrap();
    assert_eq!(stroke, path![(0, 0), (10, 0), (10, 10), (20, 10)]);

    // a single cubic cannot pass through this turn exactly
    let outcome = fit_curve(&stroke, 0.0);
    assert!(outcome.len() >= 2);
    assert_joined(&outcome.curves());
}

#[test]
fn test_samples_stay_within_tolerance() {
    for stroke in [wave(60), arc(60)] {
        for &max_error in &[1.0, 4.0] {
            let curves = fit_curve(&stroke, max_error).curves();
            let worst = worst_sample_distance(&stroke, &curves);
            assert!(
                worst <= max_error.sqrt() + 0.5,
                "worst deviation {} for max error {}",
                worst,
                max_error
            );
        }
    }
}

#[test]
fn test_noisy_stroke_within_tolerance() {
    let original = cubic!([(0.0, 0.0), (80.0, 120.0), (160.0, -60.0), (240.0, 40.0)]);
    let stroke = noisy_samples(&original, 80, 1.0, 3);
    let max_error = 4.0;

    let outcome = fit_curve(&stroke, max_error);
    for span in &outcome.spans {
        assert!(span.error <= max_error);
    }
    let worst = worst_sample_distance(&stroke, &outcome.curves());
    assert!(worst <= max_error.sqrt() + 0.5);
}

#[test]
fn test_curve_count_shrinks_with_tolerance() {
    for stroke in [wave(60), arc(60)] {
        let counts: Vec<usize> = [0.0, 0.25, 1.0, 4.0, 16.0, 64.0, 1e12]
            .iter()
            .map(|&max_error| fit_curve(&stroke, max_error).len())
            .collect();

        assert!(counts.windows(2).all(|w| w[0] >= w[1]), "{:?}", counts);
        assert_eq!(counts[counts.len() - 1], 1);
        assert!(counts[0] <= stroke.len() - 1);
    }
}

#[test]
fn test_two_point_stroke() {
    for &max_error in &[0.0, 3.0, 1e6] {
        let curves = fit_curve(&path![(0, 0), (100, 0)], max_error).curves();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves.to_svg_path(), "M0,0 C33.333333333333336,0,66.66666666666666,0,100,0");
    }
}
