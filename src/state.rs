//! The contract between a game and the search agents

use std::fmt::{Debug, Display};
use std::str::FromStr;

/// One of the two alternating roles in the game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    /// Moves first, positive utilities favour this player
    Maximizer,
    Minimizer,
}

impl Player {
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Maximizer => Cell::Maximizer,
            Player::Minimizer => Cell::Minimizer,
        }
    }

    /// Human-facing player number, 1 or 2
    pub fn number(self) -> usize {
        match self {
            Player::Maximizer => 1,
            Player::Minimizer => 2,
        }
    }
}

/// The owner of a single board cell
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Maximizer,
    Minimizer,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A line of cells (row, column or diagonal) inspected by the evaluator
pub type Line = Vec<Cell>;

/// A fully specified, immutable game position
///
/// # Notes
/// The search agents only ever read states and recurse into the children
/// produced by [`successors`](GameState::successors). Implementors must return
/// successors in ascending move order: alpha-beta pruning decisions depend on
/// a fixed iteration order.
pub trait GameState: Clone {
    type Move: Copy + Ord + Debug + Display + FromStr;

    /// Every legal move paired with the position it leads to, in ascending move order
    fn successors(&self) -> Vec<(Self::Move, Self)>;

    /// Whether the game is over
    fn is_full(&self) -> bool;

    /// The final score of a terminal position, positive favours the maximizer
    fn utility(&self) -> f64;

    /// The player whose turn it is
    fn next_player(&self) -> Player;

    fn rows(&self) -> Vec<Line>;

    fn columns(&self) -> Vec<Line>;

    fn diagonals(&self) -> Vec<Line>;
}
