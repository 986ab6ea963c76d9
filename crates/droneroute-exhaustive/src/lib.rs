//! Exact solver for the drone route problem.
//!
//! Enumerates every permutation of the destinations depth-first, in
//! lexicographic order, tracking the shortest complete route seen so far.
//! Branches whose partial length already exceeds the best complete length
//! are pruned; the strict comparison keeps the first-encountered ordering
//! on ties. O(n!) by construction — fine for the handful of canvas points
//! this engine exists for, hopeless beyond n ≈ 10.

use droneroute_core::{FrameSink, NullSink, Point, Route};

/// Search-tree nodes between keep-alive frames. Keeps cancellation latency
/// bounded even when no new minimum turns up for a long stretch.
const FRAME_CADENCE: usize = 4096;

struct Search<'a, 's> {
    points: &'a [Point],
    n: usize,
    sink: &'s mut dyn FrameSink,
    best_route: Route,
    best_len: f64,
    ticks: usize,
    cancelled: bool,
}

impl<'a, 's> Search<'a, 's> {
    fn new(points: &'a [Point], sink: &'s mut dyn FrameSink) -> Self {
        let n = points.len() - 1;
        Self {
            points,
            n,
            sink,
            best_route: Vec::with_capacity(n),
            best_len: f64::INFINITY,
            ticks: 0,
            cancelled: false,
        }
    }

    fn dfs(&mut self, route: &mut Route, visited: u32, last: usize, len: f64) {
        self.ticks += 1;
        if self.ticks % FRAME_CADENCE == 0
            && !self.best_route.is_empty()
            && !self.sink.emit(&self.best_route)
        {
            self.cancelled = true;
            return;
        }

        // Prune: this branch cannot beat the best complete route. Strict
        // comparison, so an equal-length route never displaces the first.
        if len > self.best_len {
            return;
        }

        if route.len() == self.n {
            if len < self.best_len {
                self.best_len = len;
                self.best_route.clear();
                self.best_route.extend_from_slice(route);
                if !self.sink.emit(&self.best_route) {
                    self.cancelled = true;
                }
            }
            return;
        }

        for next in 1..=self.n {
            let bit = 1u32 << (next - 1);
            if visited & bit != 0 {
                continue;
            }

            let leg = self.points[last].distance(&self.points[next]);
            route.push(next);
            self.dfs(route, visited | bit, next, len + leg);
            route.pop();

            if self.cancelled {
                return;
            }
        }
    }
}

fn search(points: &[Point], sink: &mut dyn FrameSink) -> (Route, bool) {
    let mut search = Search::new(points, sink);
    let mut route = Vec::with_capacity(search.n);
    search.dfs(&mut route, 0, 0, 0.0);
    (search.best_route, search.cancelled)
}

/// Shortest visiting order for `points[1..]` starting at `points[0]`.
///
/// `points` must hold at least the origin; at most 32 destinations fit the
/// visited bitmask, far beyond where n! is computable anyway.
pub fn solve(points: &[Point]) -> Route {
    let (route, _) = search(points, &mut NullSink);
    route
}

/// Streaming variant: emits each new best-so-far complete route into `sink`
/// while enumerating (plus a keep-alive frame every few thousand nodes),
/// then the global minimum as the final frame. Returns `None` if the sink
/// cancelled mid-search.
pub fn solve_streaming(points: &[Point], sink: &mut dyn FrameSink) -> Option<Route> {
    let (route, cancelled) = search(points, sink);
    if cancelled || !sink.emit(&route) {
        return None;
    }
    Some(route)
}
