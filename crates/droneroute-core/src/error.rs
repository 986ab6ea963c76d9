use thiserror::Error;

/// Unified result type for the route engine crates.
pub type Result<T> = std::result::Result<T, SolveError>;

/// Caller errors surfaced at entry, before any computation starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("unknown algorithm `{0}` (expected `naive` or `closest`)")]
    InvalidAlgorithm(String),
    #[error("point set is empty: at least an origin is required")]
    EmptyInput,
}
