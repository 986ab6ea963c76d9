//! Public boundary of the drone route engine.
//!
//! The caller (the canvas UI, or the harness binary standing in for it)
//! owns the points and passes `[origin, d1..dn]` per invocation; the engine
//! holds no state across calls. [`solve`] returns the final visiting order,
//! [`solve_animated`] returns a pull-based stream of intermediate orders
//! ending in that same final one. Algorithm selection is string-keyed at
//! this boundary; unknown names and an empty point set fail before any
//! computation starts.

mod animate;

use std::str::FromStr;

use log::debug;

pub use animate::AnimatedSolve;
pub use droneroute_core::{route_length, Algorithm, Point, Result, Route, SolveError};

fn validate(points: &[Point]) -> Result<()> {
    if points.is_empty() {
        return Err(SolveError::EmptyInput);
    }
    Ok(())
}

/// Compute the final visiting order for `points[1..]` starting at `points[0]`.
pub fn solve(algorithm: &str, points: &[Point]) -> Result<Route> {
    solve_with(Algorithm::from_str(algorithm)?, points)
}

/// Typed variant of [`solve`].
pub fn solve_with(algorithm: Algorithm, points: &[Point]) -> Result<Route> {
    validate(points)?;
    debug!(
        "solve: algorithm={algorithm} destinations={}",
        points.len() - 1
    );

    let route = match algorithm {
        Algorithm::Naive => droneroute_exhaustive::solve(points),
        Algorithm::Closest => droneroute_nearest::solve(points),
    };
    Ok(route)
}

/// Start an animated solve and return its frame stream.
///
/// The stream yields intermediate routes at the algorithm's cadence and
/// always ends with the frame [`solve`] would return for the same input.
/// Dropping the stream cancels the computation; see [`AnimatedSolve`].
pub fn solve_animated(algorithm: &str, points: &[Point]) -> Result<AnimatedSolve> {
    solve_animated_with(Algorithm::from_str(algorithm)?, points)
}

/// Typed variant of [`solve_animated`].
pub fn solve_animated_with(algorithm: Algorithm, points: &[Point]) -> Result<AnimatedSolve> {
    validate(points)?;
    debug!(
        "solve_animated: algorithm={algorithm} destinations={}",
        points.len() - 1
    );
    Ok(AnimatedSolve::spawn(algorithm, points.to_vec()))
}
