//! Core state representation for the N-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `State`: An immutable snapshot of an N x N sliding-tile grid, usable as
//!   a key in hash-based maps.
//! - Successor generation (`State::neighbors`): produces every state
//!   reachable by one legal blank-tile slide, in a fixed direction order.
//! - Instance construction: validated grids (`State::from_rows`), the
//!   canonical goal layout (`State::solved`), and reproducible scrambled
//!   instances (`State::scrambled`).

use crate::error::{PuzzleError, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// The cell value that denotes the blank (empty) square.
pub const BLANK: u16 = 0;

// Slide directions as (row delta, col delta), tried in this fixed order:
// down, up, right, left. Successor order is part of the engine's observable
// behavior (it fixes the expansion order for equal f-scores), so it must not
// change.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// An immutable N x N sliding-tile configuration.
///
/// Cells hold the values `0..n*n` exactly once each, in row-major order;
/// the value [`BLANK`] (0) marks the empty square. Two states are equal iff
/// their grids are equal cell by cell, and `Hash` is derived from the grid
/// contents, so `State` can key a `HashMap` or `HashSet` directly.
///
/// A `State` is never mutated after construction: every transition produces
/// a new value.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::State;
///
/// let state = State::from_rows(&[vec![1, 2], vec![3, 0]]).unwrap();
/// assert_eq!(state.size(), 2);
/// assert_eq!(state.get(1, 1), 0);
/// assert_eq!(state, State::solved(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    size: usize,
    cells: Box<[u16]>,
}

impl State {
    /// Builds a state from row vectors, validating the grid.
    ///
    /// # Arguments
    /// * `rows`: One vector per grid row, top to bottom.
    ///
    /// # Returns
    /// * `Ok(State)` if the grid is square with side length at least 2 and
    ///   its cells are exactly the values `0..n*n` (which also guarantees a
    ///   unique blank).
    /// * `Err(PuzzleError)` describing the first violation otherwise. This
    ///   is a configuration error: malformed grids are rejected here, never
    ///   discovered later during expansion.
    pub fn from_rows(rows: &[Vec<u16>]) -> Result<Self> {
        let size = rows.len();
        if size < 2 {
            return Err(PuzzleError::InvalidDimensions(format!(
                "expected at least 2 rows, found {}",
                size
            )));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(PuzzleError::InvalidDimensions(format!(
                    "row {} has {} cells, expected {} (grid must be square)",
                    r,
                    row.len(),
                    size
                )));
            }
        }

        let cells: Box<[u16]> = rows.iter().flatten().copied().collect();
        let n_cells = size * size;
        let mut seen = vec![false; n_cells];
        for &value in cells.iter() {
            let v = value as usize;
            if v >= n_cells {
                return Err(PuzzleError::InvalidValues(format!(
                    "value {} is out of range for a {}x{} grid",
                    value, size, size
                )));
            }
            if seen[v] {
                return Err(PuzzleError::InvalidValues(format!(
                    "value {} appears more than once",
                    value
                )));
            }
            seen[v] = true;
        }
        // All n*n values in range and distinct means 0..n*n each exactly
        // once, so exactly one blank.

        Ok(State { size, cells })
    }

    /// Returns the canonical solved state for the given side length:
    /// tiles `1..n*n` in row-major order with the blank in the last cell.
    ///
    /// # Panics
    /// Panics if `size` is outside `2..=255`.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::State;
    ///
    /// let goal = State::solved(3);
    /// assert_eq!(goal.get(0, 0), 1);
    /// assert_eq!(goal.get(2, 2), 0);
    /// ```
    pub fn solved(size: usize) -> Self {
        assert!(size >= 2, "puzzle side length must be at least 2");
        // Cell values are u16, which caps the side length.
        assert!(size <= 255, "puzzle side length must be at most 255");
        let n_cells = size * size;
        let cells: Box<[u16]> = (1..n_cells as u16).chain(std::iter::once(BLANK)).collect();
        State { size, cells }
    }

    /// Produces a scrambled instance by walking `moves` random legal slides
    /// away from `self`, using a seeded RNG for reproducibility.
    ///
    /// Scrambling by random walk (rather than shuffling cells) keeps the
    /// result in the reachable component of `self`, so it is always solvable
    /// back to it in at most `moves` moves. The same seed always produces
    /// the same instance.
    pub fn scrambled(&self, moves: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut current = self.clone();
        for _ in 0..moves {
            let successors = current.neighbors();
            // A valid state always has at least two legal slides.
            current = successors[rng.gen_range(0..successors.len())].clone();
        }
        current
    }

    /// The side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the value at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside `0..size`.
    pub fn get(&self, r: usize, c: usize) -> u16 {
        assert!(r < self.size && c < self.size, "cell out of bounds");
        self.cells[r * self.size + c]
    }

    /// Locates the blank cell as (row, column).
    pub fn blank_pos(&self) -> (usize, usize) {
        let idx = self
            .cells
            .iter()
            .position(|&v| v == BLANK)
            .expect("validated state always contains a blank");
        (idx / self.size, idx % self.size)
    }

    /// Produces all states reachable from `self` by one legal slide.
    ///
    /// The blank is swapped with each in-bounds orthogonal neighbor, trying
    /// directions in the fixed order down, up, right, left. A corner state
    /// yields 2 successors, an edge state 3, an interior state 4. `self` is
    /// untouched; each successor is a fresh `State`.
    pub fn neighbors(&self) -> Vec<State> {
        let (br, bc) = self.blank_pos();
        let blank_idx = br * self.size + bc;
        let mut successors = Vec::with_capacity(4);

        for (dr, dc) in DIRECTIONS {
            let nr = br as isize + dr;
            let nc = bc as isize + dc;
            if nr < 0 || nc < 0 || nr as usize >= self.size || nc as usize >= self.size {
                continue;
            }
            let swap_idx = nr as usize * self.size + nc as usize;
            let mut cells = self.cells.clone();
            cells.swap(blank_idx, swap_idx);
            successors.push(State {
                size: self.size,
                cells,
            });
        }
        successors
    }

    /// Checks that `self` and `other` can serve as start and goal of the
    /// same search.
    ///
    /// Both states are validated permutations of `0..n*n`, so matching side
    /// lengths imply matching value multisets.
    pub fn compatible_with(&self, other: &State) -> Result<()> {
        if self.size != other.size {
            return Err(PuzzleError::Mismatched(format!(
                "start is {}x{} but goal is {}x{}",
                self.size, self.size, other.size, other.size
            )));
        }
        Ok(())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size * self.size - 1).to_string().len();
        for r in 0..self.size {
            for c in 0..self.size {
                if c > 0 {
                    f.write_str(" ")?;
                }
                let value = self.get(r, c);
                if value == BLANK {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", value, width = width)?;
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn state(rows: &[Vec<u16>]) -> State {
        State::from_rows(rows).unwrap()
    }

    #[test]
    fn test_from_rows_valid() {
        let s = state(&[vec![2, 8, 3], vec![1, 6, 4], vec![0, 7, 5]]);
        assert_eq!(s.size(), 3);
        assert_eq!(s.get(0, 1), 8);
        assert_eq!(s.blank_pos(), (2, 0));
    }

    #[test]
    fn test_from_rows_non_square() {
        let result = State::from_rows(&[vec![1, 2, 3], vec![4, 5], vec![6, 7, 0]]);
        assert!(matches!(result, Err(PuzzleError::InvalidDimensions(_))));
    }

    #[test]
    fn test_from_rows_too_small() {
        let result = State::from_rows(&[vec![0]]);
        assert!(matches!(result, Err(PuzzleError::InvalidDimensions(_))));
    }

    #[test]
    fn test_from_rows_duplicate_value() {
        // Two blanks.
        let result = State::from_rows(&[vec![0, 1], vec![2, 0]]);
        assert!(matches!(result, Err(PuzzleError::InvalidValues(_))));
        // Duplicate tile, no blank.
        let result = State::from_rows(&[vec![1, 1], vec![2, 3]]);
        assert!(matches!(result, Err(PuzzleError::InvalidValues(_))));
    }

    #[test]
    fn test_from_rows_value_out_of_range() {
        let result = State::from_rows(&[vec![1, 2], vec![3, 9]]);
        assert!(matches!(result, Err(PuzzleError::InvalidValues(_))));
    }

    #[test]
    fn test_solved_layout() {
        let goal = State::solved(3);
        assert_eq!(goal, state(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]));
    }

    #[test]
    fn test_equality_and_hashing_are_structural() {
        let a = state(&[vec![1, 2], vec![3, 0]]);
        let b = state(&[vec![1, 2], vec![3, 0]]);
        let c = state(&[vec![1, 2], vec![0, 3]]);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a.clone());
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn test_neighbors_corner_edge_center() {
        // Blank in a corner: 2 successors.
        let corner = state(&[vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);
        assert_eq!(corner.neighbors().len(), 2);

        // Blank on an edge: 3 successors.
        let edge = state(&[vec![1, 0, 2], vec![3, 4, 5], vec![6, 7, 8]]);
        assert_eq!(edge.neighbors().len(), 3);

        // Blank in the center: 4 successors.
        let center = state(&[vec![1, 2, 3], vec![4, 0, 5], vec![6, 7, 8]]);
        assert_eq!(center.neighbors().len(), 4);
    }

    #[test]
    fn test_neighbors_direction_order() {
        // Blank in the center: successors must come in down, up, right,
        // left order.
        let center = state(&[vec![1, 2, 3], vec![4, 0, 5], vec![6, 7, 8]]);
        let succ = center.neighbors();
        assert_eq!(succ[0], state(&[vec![1, 2, 3], vec![4, 7, 5], vec![6, 0, 8]]));
        assert_eq!(succ[1], state(&[vec![1, 0, 3], vec![4, 2, 5], vec![6, 7, 8]]));
        assert_eq!(succ[2], state(&[vec![1, 2, 3], vec![4, 5, 0], vec![6, 7, 8]]));
        assert_eq!(succ[3], state(&[vec![1, 2, 3], vec![0, 4, 5], vec![6, 7, 8]]));
    }

    #[test]
    fn test_neighbors_do_not_mutate_source() {
        let s = state(&[vec![1, 2], vec![3, 0]]);
        let copy = s.clone();
        let _ = s.neighbors();
        assert_eq!(s, copy);
    }

    #[test]
    fn test_neighbor_relation_is_symmetric() {
        let s = state(&[vec![1, 2, 3], vec![4, 0, 5], vec![6, 7, 8]]);
        for succ in s.neighbors() {
            assert!(succ.neighbors().contains(&s));
        }
    }

    #[test]
    fn test_scrambled_is_deterministic_per_seed() {
        let goal = State::solved(3);
        let a = goal.scrambled(25, 7);
        let b = goal.scrambled(25, 7);
        assert_eq!(a, b);
        // An odd-length walk flips permutation parity, so it can never end
        // back at its origin.
        assert_ne!(a, goal);
    }

    #[test]
    fn test_scrambled_zero_moves_is_identity() {
        let goal = State::solved(4);
        assert_eq!(goal.scrambled(0, 123), goal);
    }

    #[test]
    fn test_compatible_with() {
        let a = State::solved(3);
        let b = State::solved(4);
        assert!(a.compatible_with(&a.scrambled(5, 1)).is_ok());
        assert!(matches!(
            a.compatible_with(&b),
            Err(PuzzleError::Mismatched(_))
        ));
    }

    #[test]
    fn test_display_marks_blank() {
        let s = state(&[vec![1, 2], vec![3, 0]]);
        assert_eq!(s.to_string(), "1 2\n3 .\n");
    }
}
