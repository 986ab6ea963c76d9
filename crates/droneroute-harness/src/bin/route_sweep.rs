use std::io::Read;
use std::time::Instant;

use log::{debug, info};

use droneroute_engine::{route_length, Point, Route};
use droneroute_harness::{logging, options::HarnessOptions};

fn main() {
    if let Err(message) = run() {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let now = Instant::now();
    let options = HarnessOptions::from_args()?;
    logging::init_logger(&options).map_err(|e| format!("logger init failed: {e}"))?;

    let points = read_points_from_stdin()?;
    info!(
        "input: origin=({}, {}) destinations={}",
        points[0].x,
        points[0].y,
        points.len() - 1
    );

    let route = if options.animate {
        animate(&options.algorithm, &points)?
    } else {
        droneroute_engine::solve(&options.algorithm, &points).map_err(|e| e.to_string())?
    };

    // The final route on stdout, one index per line, like the UI would
    // consume it.
    for idx in &route {
        println!("{idx}");
    }

    info!(
        "output: visits={} length={:.2} time={:.2}s",
        route.len(),
        route_length(&points, &route),
        now.elapsed().as_secs_f32()
    );

    Ok(())
}

fn animate(algorithm: &str, points: &[Point]) -> Result<Route, String> {
    let stream = droneroute_engine::solve_animated(algorithm, points).map_err(|e| e.to_string())?;

    let mut last = Route::new();
    for (n, frame) in stream.enumerate() {
        debug!(
            "frame {n}: visits={} length={:.2}",
            frame.len(),
            route_length(points, &frame)
        );
        last = frame;
    }
    Ok(last)
}

fn read_points_from_stdin() -> Result<Vec<Point>, String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("stdin read failed: {e}"))?;

    let points: Vec<Point> = serde_json::from_str(&input)
        .map_err(|e| format!("expected a JSON array of {{x, y}} points: {e}"))?;

    if points.is_empty() {
        return Err("No points provided on stdin.".to_string());
    }

    Ok(points)
}
