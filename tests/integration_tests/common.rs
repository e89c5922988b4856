use bezier_stroke::{CubicBezier, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

pub fn wave(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 5.0;
            Point::new(x, 40.0 * (x / 30.0).sin())
        })
        .collect()
}

pub fn arc(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = i as f64 * 0.1;
            Point::new(100.0 * a.cos(), 100.0 * a.sin())
        })
        .collect()
}

/// Samples of `curve` with gaussian jitter, as a shaky hand would draw it.
pub fn noisy_samples(curve: &CubicBezier, n: usize, sigma: f64, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, sigma).unwrap();
    curve
        .sample_points(n)
        .into_iter()
        .map(|p| Point::new(p.x + normal.sample(&mut rng), p.y + normal.sample(&mut rng)))
        .collect()
}

/// Largest distance from any stroke sample to a dense sampling of `curves`.
pub fn worst_sample_distance(stroke: &[Point], curves: &[CubicBezier]) -> f64 {
    let dense: Vec<Point> = curves.iter().flat_map(|c| c.sample_points(1000)).collect();
    stroke
        .iter()
        .map(|p| {
            dense
                .iter()
                .map(|q| p.distance(q))
                .fold(f64::INFINITY, f64::min)
        })
        .fold(0.0, f64::max)
}

pub fn assert_joined(curves: &[CubicBezier]) {
    for pair in curves.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }
}
