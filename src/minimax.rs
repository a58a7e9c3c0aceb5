//! An agent that searches the whole game tree

use log::debug;

use crate::{
    agent::{select_best, Agent, SearchResult},
    error::SearchError,
    state::*,
};

/// Picks moves by the exact minimax value of every successor
///
/// # Notes
/// A position with the Minimizer to move backs up the *maximum* of its
/// children and a position with the Maximizer to move backs up the minimum.
/// Move choices made by every agent in this crate are defined against this
/// mapping, so it must not be flipped.
#[derive(Clone, Debug, Default)]
pub struct MinimaxAgent {
    /// The number of states visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl MinimaxAgent {
    pub fn new() -> Self {
        Self { node_count: 0 }
    }

    /// Runs a full search from `state`, returning the best move and its value
    pub fn search<S: GameState>(&mut self, state: &S) -> Result<SearchResult<S>, SearchError> {
        self.node_count = 0;
        select_best(state, |child| self.minimax(child))
    }

    /// The exact minimax value of `state`
    pub fn minimax<S: GameState>(&mut self, state: &S) -> Result<f64, SearchError> {
        self.node_count += 1;

        if state.is_full() {
            return Ok(state.utility());
        }

        let successors = state.successors();
        if successors.is_empty() {
            return Err(SearchError::NoSuccessors);
        }

        match state.next_player() {
            Player::Minimizer => {
                let mut max_value = f64::NEG_INFINITY;
                for (_, child) in successors.iter() {
                    max_value = max_value.max(self.minimax(child)?);
                }
                Ok(max_value)
            }
            Player::Maximizer => {
                let mut min_value = f64::INFINITY;
                for (_, child) in successors.iter() {
                    min_value = min_value.min(self.minimax(child)?);
                }
                Ok(min_value)
            }
        }
    }
}

impl<S: GameState> Agent<S> for MinimaxAgent {
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), SearchError> {
        let result = self.search(state)?;
        debug!(
            "minimax chose {} (value {}, {} states)",
            result.best_move, result.value, self.node_count
        );
        Ok((result.best_move, result.state))
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
