//! Game engine for tic-tac-toe.
//!
//! The engine holds no game state of its own, only the [`RuleSet`] it
//! plays by. Every operation takes a snapshot and returns a new one.

use super::action::MoveRejected;
use super::config::{MarkPolicy, RuleSet};
use super::invariants::{CanonicalInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::state::GameState;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameEngine {
    rules: RuleSet,
}

impl GameEngine {
    /// Creates an engine playing by `rules`.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Returns the rules.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Initial state: empty board, X to move.
    pub fn start(&self) -> GameState {
        GameState::new()
    }

    /// Applies a move at `index` (0-8).
    ///
    /// Invalid moves leave the state unchanged: an index out of range, an
    /// occupied square, or a game that already has a winner.
    #[instrument(skip(self, state), fields(state = %state))]
    pub fn apply_move(&self, state: &GameState, index: usize) -> GameState {
        self.try_apply_move(state, index).unwrap_or(*state)
    }

    /// Applies a move at `index`, reporting why it was refused.
    ///
    /// # Errors
    ///
    /// - [`MoveRejected::GameOver`] if a winner is already set.
    /// - [`MoveRejected::OutOfRange`] if `index` is not in 0-8.
    /// - [`MoveRejected::CellOccupied`] if the square is taken.
    #[instrument(skip(self, state), fields(player = %state.current_player()))]
    pub fn try_apply_move(
        &self,
        state: &GameState,
        index: usize,
    ) -> Result<GameState, MoveRejected> {
        if state.is_terminal() {
            debug!("Move rejected: game over");
            return Err(MoveRejected::GameOver);
        }

        let Some(position) = Position::from_index(index) else {
            debug!("Move rejected: out of range");
            return Err(MoveRejected::OutOfRange { index });
        };

        if !state.board().is_empty(position) {
            debug!(%position, "Move rejected: square occupied");
            return Err(MoveRejected::CellOccupied { position });
        }

        let mark = state.current_player();
        let board = state.board().with_mark(position, mark);
        let next_player = match self.rules.mark_policy() {
            MarkPolicy::Alternating => mark.opponent(),
            MarkPolicy::Fixed => mark,
        };
        let winner = self.detect_winner(&board);
        let next = GameState::from_parts(board, next_player, winner);

        debug!(%position, %mark, ?winner, "Move applied");
        self.verify(&next);
        Ok(next)
    }

    /// Detects a winner under this engine's rules.
    ///
    /// Always `None` when win detection is switched off.
    pub fn detect_winner(&self, board: &Board) -> Option<Mark> {
        if *self.rules.win_detection() {
            rules::check_winner(board)
        } else {
            None
        }
    }

    /// The first completed line, for callers that highlight it.
    pub fn winning_line(&self, board: &Board) -> Option<[Position; 3]> {
        if *self.rules.win_detection() {
            rules::winning_line(board).map(|(_, line)| line)
        } else {
            None
        }
    }

    /// Positions that would be accepted as the next move.
    #[instrument(skip(self, state))]
    pub fn legal_moves(&self, state: &GameState) -> Vec<Position> {
        if state.is_terminal() {
            return Vec::new();
        }
        Position::valid_moves(state.board())
    }

    /// Postcondition check, debug builds only.
    fn verify(&self, state: &GameState) {
        if cfg!(debug_assertions)
            && self.rules.is_canonical()
            && let Err(violations) = CanonicalInvariants::check_all(state)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(board = %state.board(), %descriptions, "Postcondition failed");
        }
    }
}

/// Applies a move under the canonical rules. See [`GameEngine::apply_move`].
pub fn apply_move(state: &GameState, index: usize) -> GameState {
    GameEngine::default().apply_move(state, index)
}

/// Detects a winner. See [`rules::check_winner`].
pub fn detect_winner(board: &Board) -> Option<Mark> {
    rules::check_winner(board)
}
