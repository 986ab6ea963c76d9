use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use log::debug;

use droneroute_core::{Algorithm, FrameSink, Point, Route};

/// Bridges a solver's frame emissions onto the consumer's channel. A failed
/// send means the consumer dropped the stream; reporting that back through
/// [`FrameSink::emit`] makes the solver abandon the search.
struct ChannelSink {
    tx: Sender<Route>,
    frames: usize,
}

impl FrameSink for ChannelSink {
    fn emit(&mut self, route: &[usize]) -> bool {
        self.frames += 1;
        self.tx.send(route.to_vec()).is_ok()
    }
}

/// A running animated solve: an iterator over route frames.
///
/// Frames arrive in emission order and the last one is always the complete
/// route [`crate::solve`] would return. The worker sits on a rendezvous
/// channel, so it advances one frame per pull and never buffers ahead.
/// Dropping the stream disconnects the channel; the worker observes that at
/// its next frame, stops, and is joined before `drop` returns.
#[derive(Debug)]
pub struct AnimatedSolve {
    frames: Option<Receiver<Route>>,
    worker: Option<JoinHandle<()>>,
}

impl AnimatedSolve {
    pub(crate) fn spawn(algorithm: Algorithm, points: Vec<Point>) -> Self {
        let (tx, rx) = bounded(0);

        let worker = thread::spawn(move || {
            let mut sink = ChannelSink { tx, frames: 0 };
            let finished = match algorithm {
                Algorithm::Naive => droneroute_exhaustive::solve_streaming(&points, &mut sink),
                Algorithm::Closest => droneroute_nearest::solve_streaming(&points, &mut sink),
            };
            match finished {
                Some(_) => debug!("animated {algorithm} solve done, {} frames", sink.frames),
                None => debug!("animated {algorithm} solve cancelled at frame {}", sink.frames),
            }
        });

        Self {
            frames: Some(rx),
            worker: Some(worker),
        }
    }

    /// Drain the remaining frames and return the final route.
    pub fn into_route(mut self) -> Route {
        let mut last = Route::new();
        for frame in &mut self {
            last = frame;
        }
        last
    }
}

impl Iterator for AnimatedSolve {
    type Item = Route;

    fn next(&mut self) -> Option<Route> {
        self.frames.as_ref().and_then(|rx| rx.recv().ok())
    }
}

impl Drop for AnimatedSolve {
    fn drop(&mut self) {
        // Disconnect before joining: a worker blocked on send fails its
        // emit once the receiver is gone, then exits.
        self.frames.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{solve, solve_animated, Point, Route};
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn random_points(n: usize, seed: u64) -> Vec<Point> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        (0..=n)
            .map(|_| Point::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0)))
            .collect()
    }

    #[test]
    fn final_frame_matches_the_synchronous_result() {
        let points = random_points(6, 11);
        for algorithm in ["naive", "closest"] {
            let frames: Vec<Route> = solve_animated(algorithm, &points).unwrap().collect();
            assert!(!frames.is_empty());
            assert_eq!(frames.last().unwrap(), &solve(algorithm, &points).unwrap());
        }
    }

    #[test]
    fn into_route_returns_the_final_route() {
        let points = random_points(5, 3);
        for algorithm in ["naive", "closest"] {
            let route = solve_animated(algorithm, &points).unwrap().into_route();
            assert_eq!(route, solve(algorithm, &points).unwrap());
        }
    }

    #[test]
    fn greedy_emits_one_frame_per_destination() {
        let points = random_points(7, 40);
        let frames: Vec<Route> = solve_animated("closest", &points).unwrap().collect();
        assert_eq!(frames.len(), 7);
        for (step, frame) in frames.iter().enumerate() {
            assert_eq!(frame.len(), step + 1);
        }
    }

    #[test]
    fn zero_destinations_still_produce_a_final_frame() {
        let points = vec![Point::new(1.0, 1.0)];
        for algorithm in ["naive", "closest"] {
            let frames: Vec<Route> = solve_animated(algorithm, &points).unwrap().collect();
            assert_eq!(frames.last().unwrap(), &Route::new());
        }
    }

    #[test]
    fn dropping_the_stream_cancels_the_worker() {
        // Large enough that a full enumeration would take far longer than
        // the test: the drop must win by cancelling, not by completion.
        let points = random_points(11, 77);
        let mut stream = solve_animated("naive", &points).unwrap();

        let first = stream.next();
        assert!(first.is_some());

        // Drop joins the worker; returning promptly is the assertion.
        drop(stream);
    }

    #[test]
    fn cancelling_greedy_mid_walk_is_clean() {
        let points = random_points(8, 78);
        let mut stream = solve_animated("closest", &points).unwrap();
        assert!(stream.next().is_some());
        assert!(stream.next().is_some());
        drop(stream);
    }

    #[test]
    fn streams_of_independent_invocations_do_not_interfere() {
        let a = random_points(5, 1);
        let b = random_points(5, 2);

        let stream_a = solve_animated("naive", &a).unwrap();
        let stream_b = solve_animated("naive", &b).unwrap();

        // Interleave by draining b first, then a.
        assert_eq!(stream_b.into_route(), solve("naive", &b).unwrap());
        assert_eq!(stream_a.into_route(), solve("naive", &a).unwrap());
    }
}
