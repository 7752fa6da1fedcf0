//! Error types for the N-puzzle solver.

use thiserror::Error;

/// Errors surfaced by puzzle construction, parsing, and the search boundary.
///
/// Configuration errors (`InvalidDimensions`, `InvalidValues`, `Mismatched`,
/// `Parse`) are detected once, before a search begins, and are fatal to that
/// invocation. `InconsistentPath` signals a predecessor-map corruption bug
/// and should never occur in correct operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// The grid is not square, or its side length is below 2.
    #[error("invalid grid dimensions: {0}")]
    InvalidDimensions(String),

    /// The grid's cells are not exactly the values 0..n*n (duplicate or
    /// missing values imply a duplicate or missing blank as well).
    #[error("invalid grid values: {0}")]
    InvalidValues(String),

    /// Start and goal states cannot belong to the same search.
    #[error("incompatible start/goal states: {0}")]
    Mismatched(String),

    /// A textual grid description could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The predecessor walk from the goal did not terminate at the start.
    #[error("path reconstruction did not reach the start state")]
    InconsistentPath,
}

/// Result type alias for puzzle operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;
