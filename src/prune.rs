//! Minimax with alpha-beta pruning

use log::debug;

use crate::{
    agent::{select_best, Agent, SearchResult},
    error::SearchError,
    state::*,
};

/// Picks the same moves as [`MinimaxAgent`](crate::minimax::MinimaxAgent) while
/// visiting fewer states
///
/// # Notes
/// Successors are explored strictly in the order returned by
/// [`GameState::successors`]. A branch is only cut after every earlier sibling
/// has been searched, so the set of visited states is fixed for a given tree.
#[derive(Clone, Debug, Default)]
pub struct MinimaxPruneAgent {
    /// The number of states visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl MinimaxPruneAgent {
    pub fn new() -> Self {
        Self { node_count: 0 }
    }

    /// Runs a pruned search from `state`, returning the best move and its value
    pub fn search<S: GameState>(&mut self, state: &S) -> Result<SearchResult<S>, SearchError> {
        self.node_count = 0;
        select_best(state, |child| self.minimax(child))
    }

    /// The minimax value of `state`, searched with a fresh `(-inf, inf)` window
    pub fn minimax<S: GameState>(&mut self, state: &S) -> Result<f64, SearchError> {
        self.alphabeta(state, f64::NEG_INFINITY, f64::INFINITY)
    }

    fn alphabeta<S: GameState>(
        &mut self,
        state: &S,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<f64, SearchError> {
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
                    let value = self.alphabeta(child, alpha, beta)?;
                    max_value = max_value.max(value);
                    alpha = alpha.max(value);
                    // the minimizing side above will never allow this branch
                    if beta <= alpha {
                        break;
                    }
                }
                Ok(max_value)
            }
            Player::Maximizer => {
                let mut min_value = f64::INFINITY;
                for (_, child) in successors.iter() {
                    let value = self.alphabeta(child, alpha, beta)?;
                    min_value = min_value.min(value);
                    beta = beta.min(min_value);
                    if beta <= alpha {
                        break;
                    }
                }
                Ok(min_value)
            }
        }
    }
}

impl<S: GameState> Agent<S> for MinimaxPruneAgent {
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), SearchError> {
        let result = self.search(state)?;
        debug!(
            "alpha-beta chose {} (value {}, {} states)",
            result.best_move, result.value, self.node_count
        );
        Ok((result.best_move, result.state))
    }

    fn name(&self) -> &str {
        "Minimax (alpha-beta)"
    }
}
