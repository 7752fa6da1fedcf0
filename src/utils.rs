use crate::engine::State;
use crate::error::{PuzzleError, Result};

/// Parses an array of string slices into a `State`.
///
/// Each string slice represents one grid row, top to bottom, holding
/// whitespace-separated cell values. The blank may be written as `0` or as
/// `.`. The parsed grid goes through full `State` validation, so the usual
/// configuration errors (non-square grid, duplicate or missing values)
/// surface here as well.
///
/// # Examples
/// ```
/// use npuzzle_solver::utils::state_from_str_rows;
///
/// let state = state_from_str_rows(&["2 8 3", "1 6 4", ". 7 5"]).unwrap();
/// assert_eq!(state.get(0, 1), 8);
/// assert_eq!(state.blank_pos(), (2, 0));
///
/// assert!(state_from_str_rows(&["1 2", "3 x"]).is_err());
/// ```
pub fn state_from_str_rows(rows: &[&str]) -> Result<State> {
    let mut parsed: Vec<Vec<u16>> = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let mut cells = Vec::new();
        for token in row.split_whitespace() {
            if token == "." {
                cells.push(0);
                continue;
            }
            let value: u16 = token.parse().map_err(|_| {
                PuzzleError::Parse(format!(
                    "unrecognized cell '{}' in row {} (expected a number or '.')",
                    token, r
                ))
            })?;
            cells.push(value);
        }
        parsed.push(cells);
    }
    State::from_rows(&parsed)
}

/// Parses a start/goal instance from a single text blob.
///
/// The format is the start grid, at least one empty line, then the goal
/// grid, one row per line. Used by the `solve_puzzle` binary for its input
/// files.
pub fn instance_from_str(text: &str) -> Result<(State, State)> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    if blocks.len() != 2 {
        return Err(PuzzleError::Parse(format!(
            "expected exactly 2 grids separated by a blank line, found {}",
            blocks.len()
        )));
    }

    let start = state_from_str_rows(&blocks[0])?;
    let goal = state_from_str_rows(&blocks[1])?;
    start.compatible_with(&goal)?;
    Ok((start, goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::State;

    #[test]
    fn test_state_from_str_rows_valid() {
        let state = state_from_str_rows(&["1 2 3", "4 5 6", "7 8 0"]).unwrap();
        assert_eq!(state, State::solved(3));
    }

    #[test]
    fn test_state_from_str_rows_dot_blank() {
        let dotted = state_from_str_rows(&["1 2", "3 ."]).unwrap();
        let zeroed = state_from_str_rows(&["1 2", "3 0"]).unwrap();
        assert_eq!(dotted, zeroed);
    }

    #[test]
    fn test_state_from_str_rows_invalid_token() {
        let result = state_from_str_rows(&["1 2", "3 x"]);
        assert!(matches!(result, Err(PuzzleError::Parse(_))));
    }

    #[test]
    fn test_state_from_str_rows_validation_applies() {
        // Parses fine, but the grid is not square.
        let result = state_from_str_rows(&["1 2 3", "4 5", "6 7 0"]);
        assert!(matches!(result, Err(PuzzleError::InvalidDimensions(_))));
    }

    #[test]
    fn test_instance_from_str() {
        let text = "2 8 3\n1 6 4\n0 7 5\n\n1 2 3\n8 0 4\n7 6 5\n";
        let (start, goal) = instance_from_str(text).unwrap();
        assert_eq!(start.blank_pos(), (2, 0));
        assert_eq!(goal.blank_pos(), (1, 1));
    }

    #[test]
    fn test_instance_from_str_wrong_block_count() {
        assert!(matches!(
            instance_from_str("1 2\n3 0\n"),
            Err(PuzzleError::Parse(_))
        ));
        assert!(matches!(
            instance_from_str("1 2\n3 0\n\n2 1\n3 0\n\n1 2\n3 0\n"),
            Err(PuzzleError::Parse(_))
        ));
    }

    #[test]
    fn test_instance_from_str_mismatched_sizes() {
        let text = "1 2\n3 0\n\n1 2 3\n4 5 6\n7 8 0\n";
        assert!(matches!(
            instance_from_str(text),
            Err(PuzzleError::Mismatched(_))
        ));
    }
}
