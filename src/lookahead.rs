//! Depth-limited minimax agents

use log::debug;

use crate::{
    agent::{select_best, Agent, SearchResult},
    error::SearchError,
    evaluation::evaluate,
    state::*,
};

/// Picks moves by minimax values estimated with [`evaluate`] at a fixed depth
///
/// A depth limit of `None` searches the whole tree, as
/// [`MinimaxAgent`](crate::minimax::MinimaxAgent) does. A limit of `Some(0)`
/// values each successor of the root by its evaluation alone.
#[derive(Clone, Debug)]
pub struct MinimaxLookaheadAgent {
    depth_limit: Option<usize>,
    /// The number of states visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl MinimaxLookaheadAgent {
    pub fn new(depth_limit: Option<usize>) -> Self {
        Self {
            depth_limit,
            node_count: 0,
        }
    }

    /// Runs a depth-limited search from `state`, returning the best move and its value
    ///
    /// The root's own moves are always expanded; each successor is then
    /// searched with the full depth limit.
    pub fn search<S: GameState>(&mut self, state: &S) -> Result<SearchResult<S>, SearchError> {
        self.node_count = 0;
        select_best(state, |child| self.minimax(child))
    }

    /// The estimated minimax value of `state` with this agent's depth limit
    pub fn minimax<S: GameState>(&mut self, state: &S) -> Result<f64, SearchError> {
        self.minimax_depth(state, self.depth_limit)
    }

    /// The estimated minimax value of `state`, looking at most `depth` plies ahead
    pub fn minimax_depth<S: GameState>(
        &mut self,
        state: &S,
        depth: Option<usize>,
    ) -> Result<f64, SearchError> {
        self.node_count += 1;

        if depth == Some(0) {
            return evaluate(state);
        }
        if state.is_full() {
            return Ok(state.utility());
        }

        let successors = state.successors();
        if successors.is_empty() {
            return Err(SearchError::NoSuccessors);
        }

        let child_depth = depth.map(|depth| depth - 1);
        match state.next_player() {
            Player::Minimizer => {
                let mut max_value = f64::NEG_INFINITY;
                for (_, child) in successors.iter() {
                    max_value = max_value.max(self.minimax_depth(child, child_depth)?);
                }
                Ok(max_value)
            }
            Player::Maximizer => {
                let mut min_value = f64::INFINITY;
                for (_, child) in successors.iter() {
                    min_value = min_value.min(self.minimax_depth(child, child_depth)?);
                }
                Ok(min_value)
            }
        }
    }
}

impl<S: GameState> Agent<S> for MinimaxLookaheadAgent {
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), SearchError> {
        let result = self.search(state)?;
        debug!(
            "lookahead {:?} chose {} (value {}, {} states)",
            self.depth_limit, result.best_move, result.value, self.node_count
        );
        Ok((result.best_move, result.state))
    }

    fn name(&self) -> &str {
        "Minimax (lookahead)"
    }
}

/// Placeholder heuristic agent that values every position the same
pub const ALT_CONSTANT_VALUE: f64 = 19.0;

/// A lookahead agent whose minimax value is the constant [`ALT_CONSTANT_VALUE`],
/// so it always plays the first available move
#[derive(Clone, Debug)]
pub struct AltMinimaxLookaheadAgent {
    depth_limit: Option<usize>,
}

impl AltMinimaxLookaheadAgent {
    pub fn new(depth_limit: Option<usize>) -> Self {
        Self { depth_limit }
    }

    pub fn minimax<S: GameState>(&self, _state: &S) -> Result<f64, SearchError> {
        Ok(ALT_CONSTANT_VALUE)
    }
}

impl<S: GameState> Agent<S> for AltMinimaxLookaheadAgent {
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), SearchError> {
        let result = select_best(state, |child| self.minimax(child))?;
        debug!(
            "alternative lookahead {:?} chose {}",
            self.depth_limit, result.best_move
        );
        Ok((result.best_move, result.state))
    }

    fn name(&self) -> &str {
        "Alternative lookahead"
    }
}
