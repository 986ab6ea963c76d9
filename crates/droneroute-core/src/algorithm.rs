use std::fmt;
use std::str::FromStr;

use crate::error::SolveError;

/// Which solver handles a request. Selected by the caller per invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Exhaustive permutation search, globally minimal, O(n!).
    Naive,
    /// Greedy nearest-neighbor heuristic, O(n²), not guaranteed minimal.
    Closest,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Closest => "closest",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Algorithm::Naive),
            "closest" => Ok(Algorithm::Closest),
            other => Err(SolveError::InvalidAlgorithm(other.to_string())),
        }
    }
}
