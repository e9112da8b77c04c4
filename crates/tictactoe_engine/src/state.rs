//! Game state snapshots.

use super::rules;
use super::types::{Board, GameStatus, Mark};
use serde::{Deserialize, Serialize};

/// Complete game state.
///
/// A `Copy` snapshot. Transitions in [`GameEngine`](crate::GameEngine)
/// return a new value, so a caller can keep any earlier state around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark placed by the next move.
    current_player: Mark,
    /// Winner, once a line is complete.
    winner: Option<Mark>,
}

impl GameState {
    /// Creates a new game: empty board, X to move, no winner.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            winner: None,
        }
    }

    pub(crate) fn from_parts(board: Board, current_player: Mark, winner: Option<Mark>) -> Self {
        Self {
            board,
            current_player,
            winner,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// True once a winner is set; no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(mark) => GameStatus::Won(mark),
            None if rules::is_full(&self.board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Status line: `Winner: X`, `Next player: O`, or `Draw`.
impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status() {
            GameStatus::Won(mark) => write!(f, "Winner: {}", mark),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress => write!(f, "Next player: {}", self.current_player),
        }
    }
}
