//! A* search over the N-puzzle state space.
//!
//! The engine pairs a priority frontier (minimum f-score first, insertion
//! order among ties) with a g-score map and a predecessor map. Frontier
//! entries are never updated in place: improving a state's g-score pushes a
//! fresh entry, and entries carrying an out-of-date g-score are skipped when
//! popped (lazy deletion). With an admissible heuristic the first extraction
//! of the goal is a minimum-move solution.

use crate::engine::State;
use crate::error::{PuzzleError, Result};
use crate::heuristics::Heuristic;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;

/// Terminal result of one search invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A minimum-cost path was found. `path` runs from start to goal
    /// inclusive; `cost` is its number of moves (`path.len() - 1`).
    Found { path: Vec<State>, cost: u32 },
    /// The frontier ran dry: the goal is not in the start's reachable
    /// component (for sliding puzzles this happens whenever start and goal
    /// differ by an odd permutation). A normal outcome, not an error.
    Exhausted,
    /// The caller's expanded-node ceiling was hit before termination.
    /// Distinct from `Exhausted` so a bounded abort is never mistaken for a
    /// proof that no path exists.
    LimitReached,
}

/// A search outcome together with its effort statistics.
///
/// `expanded` is the number of states taken out of the g-score map beyond
/// the start itself; the experiment harness combines it with caller-side
/// wall-clock timing to compare heuristics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub expanded: usize,
}

// One frontier slot: the f-score at insertion time, a monotonically
// increasing sequence number for tie-breaking, and the g-score the entry was
// pushed with (used to recognize stale entries at pop time).
#[derive(Clone, Debug)]
struct FrontierEntry {
    f: u32,
    seq: u64,
    g: u32,
    state: State,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse both keys so the lowest f-score
        // pops first and equal f-scores pop in insertion order.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority frontier ordered by f-score, first-in-first-extracted among
/// equal scores.
///
/// Duplicate entries for one state are allowed; the search recognizes and
/// drops stale ones at extraction instead of removing them eagerly.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, f: u32, g: u32, state: State) {
        self.heap.push(FrontierEntry {
            f,
            seq: self.next_seq,
            g,
            state,
        });
        self.next_seq += 1;
    }

    fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

/// Runs A* from `start` to `goal` with the given heuristic.
///
/// Returns `Ok` with a [`SearchReport`] whose outcome is either
/// [`SearchOutcome::Found`] or [`SearchOutcome::Exhausted`], or a
/// configuration error if the two states are incompatible. Expansion order
/// is fully deterministic, so identical inputs always produce identical
/// reports.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::State;
/// use npuzzle_solver::heuristics::ManhattanDistance;
/// use npuzzle_solver::solver::{solve_astar, SearchOutcome};
///
/// let goal = State::solved(3);
/// let start = goal.scrambled(12, 42);
/// let report = solve_astar(&start, &goal, &ManhattanDistance).unwrap();
/// assert!(matches!(report.outcome, SearchOutcome::Found { .. }));
/// ```
pub fn solve_astar(start: &State, goal: &State, heuristic: &dyn Heuristic) -> Result<SearchReport> {
    solve_astar_bounded(start, goal, heuristic, usize::MAX)
}

/// Runs A* with a ceiling on expanded nodes.
///
/// Exceeding `max_expanded` aborts the search with
/// [`SearchOutcome::LimitReached`] rather than a partial path, so callers
/// wanting bounded effort can distinguish "gave up" from "no path exists".
pub fn solve_astar_bounded(
    start: &State,
    goal: &State,
    heuristic: &dyn Heuristic,
    max_expanded: usize,
) -> Result<SearchReport> {
    start.compatible_with(goal)?;

    debug!(
        size = start.size(),
        heuristic = heuristic.name(),
        "starting A* search"
    );

    let mut frontier = Frontier::new();
    let mut g_score: HashMap<State, u32> = HashMap::new();
    let mut came_from: HashMap<State, State> = HashMap::new();

    g_score.insert(start.clone(), 0);
    frontier.push(heuristic.estimate(start, goal), 0, start.clone());

    while let Some(entry) = frontier.pop_min() {
        let current_g = g_score[&entry.state];
        if entry.g > current_g {
            // Stale entry: this state was re-discovered with a better
            // g-score after the entry was pushed. Skip it.
            continue;
        }

        if entry.state == *goal {
            let path = reconstruct_path(&came_from, start, goal)?;
            let expanded = g_score.len() - 1;
            debug!(cost = current_g, expanded, "goal reached");
            return Ok(SearchReport {
                outcome: SearchOutcome::Found {
                    path,
                    cost: current_g,
                },
                expanded,
            });
        }

        if g_score.len() - 1 >= max_expanded {
            debug!(max_expanded, "expanded-node ceiling hit, aborting");
            return Ok(SearchReport {
                outcome: SearchOutcome::LimitReached,
                expanded: g_score.len() - 1,
            });
        }

        for neighbor in entry.state.neighbors() {
            // Unit edge cost: every slide is exactly one move.
            let tentative_g = current_g + 1;
            match g_score.get(&neighbor) {
                Some(&best) if best <= tentative_g => {}
                _ => {
                    g_score.insert(neighbor.clone(), tentative_g);
                    came_from.insert(neighbor.clone(), entry.state.clone());
                    let f = tentative_g + heuristic.estimate(&neighbor, goal);
                    frontier.push(f, tentative_g, neighbor);
                }
            }
        }
    }

    let expanded = g_score.len() - 1;
    debug!(expanded, "frontier exhausted, goal unreachable");
    Ok(SearchReport {
        outcome: SearchOutcome::Exhausted,
        expanded,
    })
}

/// Rebuilds the start-to-goal path from a predecessor map.
///
/// Walks backward from `goal` until a state with no predecessor is reached,
/// then reverses the collected sequence. The walk must end at `start`;
/// anything else means the predecessor map is corrupt and yields
/// [`PuzzleError::InconsistentPath`].
pub fn reconstruct_path(
    came_from: &HashMap<State, State>,
    start: &State,
    goal: &State,
) -> Result<Vec<State>> {
    let mut path = vec![goal.clone()];
    let mut current = goal;

    // Each step strictly decreases the g-score in a correct map, so a walk
    // longer than the map itself can only mean a cycle.
    let max_steps = came_from.len() + 1;
    while let Some(prev) = came_from.get(current) {
        if path.len() > max_steps {
            return Err(PuzzleError::InconsistentPath);
        }
        path.push(prev.clone());
        current = prev;
    }

    if path.last() != Some(start) {
        return Err(PuzzleError::InconsistentPath);
    }
    path.reverse();
    Ok(path)
}
