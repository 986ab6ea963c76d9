//! Greedy nearest-neighbor solver.
//!
//! Starts at the origin and repeatedly appends the closest unvisited
//! destination, O(n²) overall. Equidistant candidates resolve to the lowest
//! index, so the result is deterministic. The route is a heuristic: cheap to
//! compute and usually decent, with no optimality guarantee.

use droneroute_core::{FrameSink, NullSink, Point, Route};

fn search(points: &[Point], sink: &mut dyn FrameSink) -> Option<Route> {
    let n = points.len() - 1;
    let mut visited = vec![false; n + 1];
    let mut route = Vec::with_capacity(n);
    let mut last = 0usize;

    for _ in 0..n {
        let mut best_idx = 0usize;
        let mut best_dist = f64::INFINITY;
        // Ascending scan + strict `<`: ties go to the lowest index.
        for (idx, point) in points.iter().enumerate().skip(1) {
            if visited[idx] {
                continue;
            }
            let dist = points[last].distance(point);
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx;
            }
        }

        visited[best_idx] = true;
        route.push(best_idx);
        last = best_idx;

        if !sink.emit(&route) {
            return None;
        }
    }

    // With no destinations the loop never emits; the final frame still must.
    if n == 0 && !sink.emit(&route) {
        return None;
    }

    Some(route)
}

/// Greedy visiting order for `points[1..]` starting at `points[0]`.
pub fn solve(points: &[Point]) -> Route {
    search(points, &mut NullSink).unwrap_or_default()
}

/// Streaming variant: one frame per selected destination, the last selection
/// frame being the complete route. Returns `None` if the sink cancelled.
pub fn solve_streaming(points: &[Point], sink: &mut dyn FrameSink) -> Option<Route> {
    search(points, sink)
}
