//! Admissible heuristics for estimating remaining move counts.
//!
//! Two strategies are provided:
//! - [`MisplacedTiles`] (h1): the number of non-blank tiles out of place.
//! - [`ManhattanDistance`] (h2): the summed Manhattan distance of every
//!   non-blank tile from its goal position.
//!
//! Both are admissible (never overestimate the true remaining cost) and
//! consistent, and h2 dominates h1: every misplaced tile contributes at
//! least one unit of Manhattan distance. Dominance makes h2 expand no more
//! nodes than h1 on the same instance, which is what the comparison harness
//! measures.

use crate::engine::{State, BLANK};

/// A cost-estimation strategy over (state, goal) pairs.
///
/// Implementations must be pure and stateless: the search engine reuses one
/// instance across an entire search, and sequential searches may share it.
/// Estimates are `u32`, so they are non-negative by construction; an
/// implementation must also never overestimate the true remaining move
/// count, or the engine loses its optimality guarantee.
pub trait Heuristic {
    /// Estimates the number of moves still needed to turn `state` into
    /// `goal`. Must return 0 when `state == goal`.
    fn estimate(&self, state: &State, goal: &State) -> u32;

    /// A short label for reports and logs.
    fn name(&self) -> &str;
}

/// Adapter letting any pure function over (state, goal) serve as a
/// heuristic. Built with [`from_fn`].
pub struct FnHeuristic<F> {
    f: F,
    name: &'static str,
}

/// Wraps a plain function or closure as a named [`Heuristic`].
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::State;
/// use npuzzle_solver::heuristics::{from_fn, Heuristic};
///
/// let zero = from_fn("zero", |_: &State, _: &State| 0);
/// let goal = State::solved(3);
/// assert_eq!(zero.estimate(&goal, &goal), 0);
/// ```
pub fn from_fn<F>(name: &'static str, f: F) -> FnHeuristic<F>
where
    F: Fn(&State, &State) -> u32,
{
    FnHeuristic { f, name }
}

impl<F> Heuristic for FnHeuristic<F>
where
    F: Fn(&State, &State) -> u32,
{
    fn estimate(&self, state: &State, goal: &State) -> u32 {
        (self.f)(state, goal)
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// h1: counts the non-blank cells whose value differs from the goal.
///
/// Each slide moves exactly one tile, so it can fix at most one mismatch;
/// the count therefore never overestimates the remaining moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct MisplacedTiles;

impl Heuristic for MisplacedTiles {
    fn estimate(&self, state: &State, goal: &State) -> u32 {
        let n = state.size();
        let mut misplaced = 0;
        for r in 0..n {
            for c in 0..n {
                let value = state.get(r, c);
                if value != BLANK && value != goal.get(r, c) {
                    misplaced += 1;
                }
            }
        }
        misplaced
    }

    fn name(&self) -> &str {
        "misplaced tiles"
    }
}

/// h2: sums, over every non-blank tile, the Manhattan distance between its
/// position in `state` and its position in `goal`.
///
/// Each slide moves one tile by one cell, so it reduces the sum by at most
/// one; the sum therefore never overestimates the remaining moves, and it
/// dominates [`MisplacedTiles`] pointwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    fn estimate(&self, state: &State, goal: &State) -> u32 {
        let n = state.size();

        // Map each value to its goal coordinates, indexed by value.
        let mut goal_pos = vec![(0usize, 0usize); n * n];
        for r in 0..n {
            for c in 0..n {
                goal_pos[goal.get(r, c) as usize] = (r, c);
            }
        }

        let mut distance = 0u32;
        for r in 0..n {
            for c in 0..n {
                let value = state.get(r, c);
                if value == BLANK {
                    continue;
                }
                let (gr, gc) = goal_pos[value as usize];
                distance += (r.abs_diff(gr) + c.abs_diff(gc)) as u32;
            }
        }
        distance
    }

    fn name(&self) -> &str {
        "manhattan distance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, VecDeque};

    fn state(rows: &[Vec<u16>]) -> State {
        State::from_rows(rows).unwrap()
    }

    /// True shortest distances from `goal` to every reachable state,
    /// computed by breadth-first search. Slides are reversible, so the
    /// distance from the goal equals the distance to it.
    fn true_distances(goal: &State) -> HashMap<State, u32> {
        let mut dist = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(goal.clone(), 0);
        queue.push_back(goal.clone());
        while let Some(current) = queue.pop_front() {
            let d = dist[&current];
            for next in current.neighbors() {
                if !dist.contains_key(&next) {
                    dist.insert(next.clone(), d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist
    }

    #[test]
    fn test_misplaced_tiles_fixture() {
        let start = state(&[vec![2, 8, 3], vec![1, 6, 4], vec![0, 7, 5]]);
        let goal = state(&[vec![1, 2, 3], vec![8, 0, 4], vec![7, 6, 5]]);
        assert_eq!(MisplacedTiles.estimate(&start, &goal), 5);
    }

    #[test]
    fn test_manhattan_distance_fixture() {
        let start = state(&[vec![2, 8, 3], vec![1, 6, 4], vec![0, 7, 5]]);
        let goal = state(&[vec![1, 2, 3], vec![8, 0, 4], vec![7, 6, 5]]);
        assert_eq!(ManhattanDistance.estimate(&start, &goal), 6);
    }

    #[test]
    fn test_zero_at_goal() {
        let goal = State::solved(3);
        assert_eq!(MisplacedTiles.estimate(&goal, &goal), 0);
        assert_eq!(ManhattanDistance.estimate(&goal, &goal), 0);
    }

    #[test]
    fn test_blank_is_ignored() {
        // Only the blank and tile 3 are displaced by one slide; a single
        // misplaced tile, one unit of Manhattan distance.
        let goal = state(&[vec![1, 2], vec![3, 0]]);
        let one_off = state(&[vec![1, 2], vec![0, 3]]);
        assert_eq!(MisplacedTiles.estimate(&one_off, &goal), 1);
        assert_eq!(ManhattanDistance.estimate(&one_off, &goal), 1);
    }

    #[test]
    fn test_both_admissible_on_2x2() {
        // The 2x2 reachable component has 12 states; check every one
        // against exact distances.
        let goal = State::solved(2);
        let dist = true_distances(&goal);
        assert_eq!(dist.len(), 12);
        for (s, &d) in &dist {
            assert!(MisplacedTiles.estimate(s, &goal) <= d);
            assert!(ManhattanDistance.estimate(s, &goal) <= d);
        }
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        let goal = State::solved(3);
        for seed in 0..20 {
            let s = goal.scrambled(30, seed);
            assert!(
                ManhattanDistance.estimate(&s, &goal) >= MisplacedTiles.estimate(&s, &goal),
                "dominance violated for seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_closure_as_heuristic() {
        let zero = from_fn("zero", |_: &State, _: &State| 0);
        let goal = State::solved(3);
        assert_eq!(zero.estimate(&goal, &goal), 0);
        assert_eq!(zero.name(), "zero");
    }
}
