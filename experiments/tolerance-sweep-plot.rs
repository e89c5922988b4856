// sweep the error tolerance and plot how many cubic curves the fit needs
// for a few noisy strokes

use bezier_stroke::{cubic, fit_curve, CubicBezier, Point};
use log::info;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::fs;

const OUTPUT_DIR: &str = "output";
const SAMPLES_PER_STROKE: usize = 120;
const NOISE_SIGMA: f64 = 1.0;
const SWEEP_STEPS: usize = 40;
// range of the tolerance slider in the drawing app
const MIN_ERROR: f64 = 0.1;
const MAX_ERROR: f64 = 10.0;

fn noisy_stroke(curve: &CubicBezier, normal: &Normal<f64>, rng: &mut StdRng) -> Vec<Point> {
    curve
        .sample_points(SAMPLES_PER_STROKE)
        .into_iter()
        .map(|p| Point::new(p.x + normal.sample(rng), p.y + normal.sample(rng)))
        .collect()
}

fn tolerances() -> Vec<f64> {
    let ratio = (MAX_ERROR / MIN_ERROR).ln();
    (0..SWEEP_STEPS)
        .map(|i| MIN_ERROR * (ratio * i as f64 / (SWEEP_STEPS - 1) as f64).exp())
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let normal = Normal::new(0.0, NOISE_SIGMA)?;
    let strokes = [
        ("arch", cubic!([(0.0, 0.0), (60.0, 200.0), (240.0, 200.0), (300.0, 0.0)])),
        ("s-curve", cubic!([(0.0, 0.0), (300.0, 0.0), (0.0, 300.0), (300.0, 300.0)])),
        ("loop", cubic!([(0.0, 100.0), (400.0, 300.0), (-100.0, 300.0), (300.0, 100.0)])),
    ];
    let sweeps: Vec<(&str, Vec<(f64, f64)>)> = strokes
        .iter()
        .map(|(name, curve)| {
            let stroke = noisy_stroke(curve, &normal, &mut rng);
            let counts: Vec<(f64, f64)> = tolerances()
                .into_iter()
                .map(|max_error| (max_error, fit_curve(&stroke, max_error).len() as f64))
                .collect();
            info!(
                "{}: {} curves at max error {}, {} at {}",
                name, counts[0].1, MIN_ERROR, counts[counts.len() - 1].1, MAX_ERROR
            );
            (*name, counts)
        })
        .collect();

    let max_count = sweeps
        .iter()
        .flat_map(|(_, counts)| counts.iter().map(|(_, count)| *count))
        .fold(1.0, f64::max);

    fs::create_dir_all(OUTPUT_DIR)?;
    let output = format!("{}/tolerance-sweep.svg", OUTPUT_DIR);
    let root = SVGBackend::new(&output, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Fitted curves per stroke", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((MIN_ERROR..MAX_ERROR).log_scale(), 0.0..max_count + 1.0)?;

    chart
        .configure_mesh()
        .x_desc("max error (squared distance)")
        .y_desc("curve count")
        .draw()?;

    let colors = [RED, BLUE, GREEN];
    for ((name, counts), color) in sweeps.into_iter().zip(colors) {
        chart
            .draw_series(LineSeries::new(counts, color.stroke_width(2)))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("plot written to {}", output);

    Ok(())
}
