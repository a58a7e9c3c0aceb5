//! A Connect 383 position
//!
//! Pieces drop into columns as in Connect 4, but nobody wins early: the game
//! runs until the board is full and is then scored by the runs of three or
//! more pieces each player has made.

use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::fmt;
use std::io::{stdout, Write};
use std::str::FromStr;

use crate::{state::*, streaks::runs, HEIGHT, MAX_DIMENSION, MIN_SCORING_RUN, WIDTH};

/// A zero-indexed column, shown and parsed one-indexed
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Column(pub usize);

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

impl FromStr for Column {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<usize>()? {
            0 => Err(anyhow!("columns are numbered from 1")),
            column => Ok(Column(column - 1)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, bottom-to-top
    heights: Vec<usize>,
    num_moves: usize,
}

impl Board {
    /// Creates an empty board, each dimension being between 1 and 9
    pub fn new(width: usize, height: usize) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height)].iter() {
            if *value < 1 || *value > MAX_DIMENSION {
                return Err(anyhow!(
                    "Invalid board {} {}, must be between 1 and {}",
                    name,
                    value,
                    MAX_DIMENSION
                ));
            }
        }
        Ok(Self::empty(width, height))
    }

    fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            heights: vec![0; width],
            num_moves: 0,
        }
    }

    /// Replays a sequence of one-indexed column digits on an empty board
    pub fn from_moves<S: AsRef<str>>(moves: S, width: usize, height: usize) -> Result<Self> {
        let mut board = Self::new(width, height)?;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => board.play_checked(column as usize)?,
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// The cell at `column`, `row`, with row 0 at the bottom
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[column + self.width * row]
    }

    pub fn playable(&self, column: usize) -> bool {
        column < self.width && self.heights[column] < self.height
    }

    /// Drops a piece for the player to move, the column must be playable
    pub fn play(&mut self, column: usize) {
        let cell = self.next_player().to_cell();
        self.cells[column + self.width * self.heights[column]] = cell;
        self.heights[column] += 1;
        self.num_moves += 1;
    }

    /// Plays a move given by a one-indexed column, rejecting illegal moves
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<()> {
        if column_one_indexed < 1 || column_one_indexed > self.width {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                self.width
            ));
        }
        let column = column_one_indexed - 1;
        if !self.playable(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }
        self.play(column);
        Ok(())
    }

    /// Points scored by each player: `length²` for every run of at least three
    pub fn scores(&self) -> (usize, usize) {
        let mut max_score = 0;
        let mut min_score = 0;

        let lines = self
            .rows()
            .into_iter()
            .chain(self.columns())
            .chain(self.diagonals());
        for line in lines {
            for (cell, length) in runs(&line) {
                if length < MIN_SCORING_RUN {
                    continue;
                }
                match cell {
                    Cell::Maximizer => max_score += length * length,
                    Cell::Minimizer => min_score += length * length,
                    Cell::Empty => {}
                }
            }
        }
        (max_score, min_score)
    }

    /// The player with the higher score, if the game is over and not drawn
    pub fn winner(&self) -> Option<Player> {
        if !self.is_full() {
            return None;
        }
        let (max_score, min_score) = self.scores();
        match max_score.cmp(&min_score) {
            std::cmp::Ordering::Greater => Some(Player::Maximizer),
            std::cmp::Ordering::Less => Some(Player::Minimizer),
            std::cmp::Ordering::Equal => None,
        }
    }

    // walks up-right (rising) or down-right from a start cell to the board edge
    fn diagonal(&self, mut column: usize, mut row: usize, rising: bool) -> Line {
        let mut line = Vec::new();
        loop {
            line.push(self.get(column, row));
            column += 1;
            let next_row = if rising {
                row + 1
            } else {
                match row.checked_sub(1) {
                    Some(next_row) => next_row,
                    None => break,
                }
            };
            if column >= self.width || next_row >= self.height {
                break;
            }
            row = next_row;
        }
        line
    }

    /// Renders the board to the terminal, top row first
    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=self.width).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in (0..self.height).rev() {
            for column in 0..self.width {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match self.get(column, row) {
                            Cell::Maximizer => Color::Red,
                            Cell::Minimizer => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(WIDTH, HEIGHT)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            let line: String = (0..self.width)
                .map(|column| match self.get(column, row) {
                    Cell::Maximizer => 'X',
                    Cell::Minimizer => 'O',
                    Cell::Empty => '.',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl GameState for Board {
    type Move = Column;

    fn successors(&self) -> Vec<(Column, Board)> {
        (0..self.width)
            .filter(|&column| self.playable(column))
            .map(|column| {
                let mut next = self.clone();
                next.play(column);
                (Column(column), next)
            })
            .collect()
    }

    fn is_full(&self) -> bool {
        self.num_moves == self.width * self.height
    }

    fn utility(&self) -> f64 {
        let (max_score, min_score) = self.scores();
        max_score as f64 - min_score as f64
    }

    fn next_player(&self) -> Player {
        if self.num_moves % 2 == 0 {
            Player::Maximizer
        } else {
            Player::Minimizer
        }
    }

    /// Rows from the top of the board down
    fn rows(&self) -> Vec<Line> {
        (0..self.height)
            .rev()
            .map(|row| (0..self.width).map(|column| self.get(column, row)).collect())
            .collect()
    }

    /// Columns from left to right, each read bottom to top
    fn columns(&self) -> Vec<Line> {
        (0..self.width)
            .map(|column| (0..self.height).map(|row| self.get(column, row)).collect())
            .collect()
    }

    /// Every rising and falling diagonal, including the single cells in the corners
    fn diagonals(&self) -> Vec<Line> {
        let mut diagonals = Vec::with_capacity(2 * (self.width + self.height - 1));

        // rising diagonals start on the bottom row or the left column
        for column in 0..self.width {
            diagonals.push(self.diagonal(column, 0, true));
        }
        for row in 1..self.height {
            diagonals.push(self.diagonal(0, row, true));
        }

        // falling diagonals start on the top row or the left column
        for column in 0..self.width {
            diagonals.push(self.diagonal(column, self.height - 1, false));
        }
        for row in 0..self.height - 1 {
            diagonals.push(self.diagonal(0, row, false));
        }

        diagonals
    }
}
