// replay recorded strokes through the incremental controller, the way the
// drawing app feeds pointer events, and write the result as svg
//
// usage: replay-stroke [recording.json] [output.svg]
// without a recording a synthetic noisy stroke is replayed

use bezier_stroke::modules::export::svg::{stroke_to_svg, to_svg};
use bezier_stroke::modules::parse::json::{parse_recording, StrokeRecording};
use bezier_stroke::modules::stroke::tail::StrokeSnapshot;
use bezier_stroke::{BezierCurve, FitConfig, Point, StrokeController};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::env;
use std::fs;
use std::path::Path;

const DEFAULT_OUTPUT: &str = "output/replay.svg";
const MARGIN: f64 = 20.0;

fn synthetic_recording() -> Result<StrokeRecording, rand_distr::NormalError> {
    let mut rng = StdRng::seed_from_u64(7);
    let normal = Normal::new(0.0, 0.8)?;
    let stroke = (0..150)
        .map(|i| {
            let x = 20.0 + i as f64 * 4.0;
            let y = 200.0 + 80.0 * (x / 60.0).sin();
            Point::new(x + normal.sample(&mut rng), y + normal.sample(&mut rng))
        })
        .collect();

    Ok(StrokeRecording {
        max_error: None,
        strokes: vec![stroke],
    })
}

fn canvas_size(recording: &StrokeRecording) -> (u32, u32) {
    let (w, h) = recording
        .strokes
        .iter()
        .flatten()
        .fold((0.0_f64, 0.0_f64), |(w, h), p| (w.max(p.x), h.max(p.y)));
    ((w + MARGIN).ceil() as u32, (h + MARGIN).ceil() as u32)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let recording = match args.get(1) {
        Some(input) => {
            info!("replaying {}", input);
            parse_recording(&fs::read_to_string(input)?)?
        }
        None => {
            info!("no recording given, replaying a synthetic stroke");
            synthetic_recording()?
        }
    };
    let output = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);

    let mut config = FitConfig::default();
    if let Some(max_error) = recording.max_error {
        config.set_max_error(max_error)?;
    }
    config.show_points = true;

    let (width, height) = canvas_size(&recording);
    let mut controller = StrokeController::new(config);
    let mut rng = StdRng::seed_from_u64(0);
    let mut drawing = BezierCurve::default();
    let mut frame = None;

    for (index, stroke) in recording.strokes.iter().enumerate() {
        let Some((first, rest)) = stroke.split_first() else {
            continue;
        };

        controller.press(*first);
        for (i, point) in rest.iter().enumerate() {
            controller.move_to(*point);
            debug!("stroke {} sample {}: {:?}", index, i + 1, controller.metrics());
            // keep the mid-stroke frame of the first stroke
            if frame.is_none() && i == rest.len() / 2 {
                frame = Some(StrokeSnapshot::capture(&controller, &mut rng));
            }
        }
        let curve = controller.release();

        let metrics = controller.metrics();
        info!(
            "stroke {}: {} samples -> {} curves, reduced rate {:.3}",
            index,
            stroke.len(),
            metrics.curve_count,
            metrics.reduced_rate
        );
        drawing.extend(curve);
    }

    let output = Path::new(output);
    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(output, to_svg(&drawing, width, height))?;
    info!("{} curves written to {}", drawing.len(), output.display());

    if let Some(frame) = frame {
        let frame_output = output.with_extension("frame.svg");
        fs::write(&frame_output, stroke_to_svg(&frame, width, height))?;
        info!("mid-stroke frame written to {}", frame_output.display());
    }

    Ok(())
}
