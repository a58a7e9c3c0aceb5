//! Heuristic scoring of non-terminal positions

use crate::{error::SearchError, state::*, streaks::streaks};

/// Shortest run that is worth anything to the evaluator
pub const MIN_EVALUATED_RUN: usize = 2;

/// The Maximizer and Minimizer contributions of a single line
pub fn line_scores(line: &[Cell]) -> Result<(f64, f64), SearchError> {
    let mut max_score = 0.0;
    let mut min_score = 0.0;
    for (cell, length) in streaks(line)? {
        if length < MIN_EVALUATED_RUN {
            continue;
        }
        let value = ((length + 1) * (length + 1)) as f64 / 2.0;
        match cell {
            Cell::Maximizer => max_score += value,
            Cell::Minimizer => min_score += value,
            Cell::Empty => {}
        }
    }
    Ok((max_score, min_score))
}

/// Estimates the value of any position from the runs on the board
///
/// Runs in time proportional to the board size and never looks at successors.
pub fn evaluate<S: GameState>(state: &S) -> Result<f64, SearchError> {
    let mut max_score = 0.0;
    let mut min_score = 0.0;

    let lines = state
        .rows()
        .into_iter()
        .chain(state.columns())
        .chain(state.diagonals());
    for line in lines {
        let (max_line, min_line) = line_scores(&line)?;
        max_score += max_line;
        min_score += min_line;
    }

    Ok(max_score - min_score)
}
