//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The history records them
//! alongside the snapshots they produced.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was not applied.
///
/// [`GameEngine::apply_move`](crate::GameEngine::apply_move) absorbs these
/// as no-ops; [`GameEngine::try_apply_move`](crate::GameEngine::try_apply_move)
/// reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejected {
    /// Index outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", index)]
    OutOfRange {
        /// The requested index.
        index: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", position)]
    CellOccupied {
        /// The occupied position.
        position: Position,
    },

    /// A winner is already set.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejected {}
