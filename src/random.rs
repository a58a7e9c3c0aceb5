use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{agent::Agent, error::SearchError, state::GameState};

/// An agent that plays a uniformly random legal move
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an agent whose sequence of choices is fixed by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), SearchError> {
        let mut successors = state.successors();
        if successors.is_empty() {
            return Err(SearchError::NoSuccessors);
        }
        let idx = self.rng.gen_range(0..successors.len());
        let (next_move, next_state) = successors.swap_remove(idx);
        debug!("random agent chose {}", next_move);
        Ok((next_move, next_state))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
