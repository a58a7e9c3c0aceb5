//! Game-tree search agents for the board game 'Connect 383'
//!
//! Connect 383 is played like Connect 4, but the game only ends when the
//! board is full. Every run of three or more pieces in a row, column or
//! diagonal then scores its length squared for its owner.
//!
//! The agents in this crate work on any position implementing [`GameState`],
//! choosing moves with exact minimax, depth-limited minimax backed by a
//! heuristic evaluation, or minimax with alpha-beta pruning.
//!
//! # Basic Usage
//!
//! ```
//! use connect383_ai::{board::Board, minimax::MinimaxAgent, prune::MinimaxPruneAgent};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_moves("1212", 3, 2)?;
//!
//! let exact = MinimaxAgent::new().search(&board)?;
//! let pruned = MinimaxPruneAgent::new().search(&board)?;
//!
//! assert_eq!(exact.best_move, pruned.best_move);
//! assert_eq!(exact.value, pruned.value);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod agent;

pub mod board;

pub mod error;

pub mod evaluation;

pub mod human;

pub mod lookahead;

pub mod minimax;

pub mod prune;

pub mod random;

pub mod state;

pub mod streaks;


pub use agent::{get_agent, get_agent_with_seed, Agent, AgentKind, SearchResult};
pub use board::{Board, Column};
pub use error::SearchError;
pub use state::{Cell, GameState, Player};

/// The default width of the game board in tiles
pub const WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The largest board dimension, moves are written as single digits
pub const MAX_DIMENSION: usize = 9;

/// The shortest run of pieces that scores at the end of the game
pub const MIN_SCORING_RUN: usize = 3;

// ensure that the default board can be written down as a move string
const_assert!(WIDTH <= MAX_DIMENSION && HEIGHT <= MAX_DIMENSION);
const_assert!(MIN_SCORING_RUN <= WIDTH && MIN_SCORING_RUN <= HEIGHT);
