//! # N-Puzzle Solver Library
//!
//! This library provides an A* search engine for sliding-tile (N-puzzle)
//! instances of any square size, driven by interchangeable admissible
//! heuristics, and reports the search effort so heuristics can be compared
//! empirically.
//!
//! It is used by two binaries:
//! - `solve_puzzle`: Solves a single instance read from a file and prints
//!   the move sequence.
//! - `compare_heuristics`: Runs the misplaced-tiles and Manhattan-distance
//!   heuristics over fixed and seeded-random instances, then outputs a
//!   comparative table of expanded nodes, wall-clock time, and path cost.
//!
//! ## Modules
//! - `engine`: The immutable grid snapshot (`State`), instance validation,
//!   and legal-move successor generation.
//! - `heuristics`: The `Heuristic` trait and the two provided strategies,
//!   `MisplacedTiles` (h1) and `ManhattanDistance` (h2).
//! - `solver`: The A* loop, its priority frontier, search outcomes, and
//!   path reconstruction.
//! - `error`: The `PuzzleError` taxonomy separating configuration errors
//!   from internal invariant violations.
//! - `utils`: Parsing of textual grid descriptions.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full
// path, e.g. `npuzzle_solver::solver::solve_astar`. This keeps the
// top-level library namespace cleaner.
