//! Game history with time travel.
//!
//! Snapshots live in an [`im::Vector`], so cloning a history shares
//! structure with the original instead of copying every state. Jumping back
//! keeps later snapshots until a new move is played from the earlier point,
//! at which point the abandoned branch is dropped.

use super::action::{Move, MoveRejected};
use super::engine::GameEngine;
use super::invariants::{HistoryConsistent, Invariant, InvariantViolation};
use super::position::Position;
use super::state::GameState;
use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Timeline of game snapshots plus a cursor.
///
/// Deserialization replays the recorded moves and rejects any timeline the
/// engine could not have produced, so the cursor always points at a
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameHistory")]
pub struct GameHistory {
    engine: GameEngine,
    snapshots: Vector<GameState>,
    moves: Vector<Move>,
    step: usize,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct RawGameHistory {
    engine: GameEngine,
    snapshots: Vector<GameState>,
    moves: Vector<Move>,
    step: usize,
}

impl TryFrom<RawGameHistory> for GameHistory {
    type Error = InvariantViolation;

    fn try_from(raw: RawGameHistory) -> Result<Self, Self::Error> {
        let history = Self {
            engine: raw.engine,
            snapshots: raw.snapshots,
            moves: raw.moves,
            step: raw.step,
        };

        if !HistoryConsistent::holds(&history) {
            warn!(
                len = history.snapshots.len(),
                step = history.step,
                "Rejecting inconsistent history"
            );
            return Err(InvariantViolation::new(HistoryConsistent::description()));
        }

        let replays = history
            .snapshots
            .iter()
            .zip(history.snapshots.iter().skip(1))
            .zip(history.moves.iter())
            .all(|((before, after), mv)| {
                history
                    .engine
                    .try_apply_move(before, mv.position.to_index())
                    .is_ok_and(|next| next == *after)
            });
        if !replays {
            warn!("Rejecting history the engine cannot replay");
            return Err(InvariantViolation::new(
                "Every snapshot follows from the engine's rules",
            ));
        }

        Ok(history)
    }
}

impl GameHistory {
    /// Starts a history at the engine's initial state.
    #[instrument]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            snapshots: Vector::unit(engine.start()),
            moves: Vector::new(),
            step: 0,
        }
    }

    /// Engine used for moves.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &GameState {
        // Construction, play and jumps keep step < len.
        &self.snapshots[self.step]
    }

    /// Cursor position; 0 is the game start.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of snapshots, including the start.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the start snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &Vector<GameState> {
        &self.snapshots
    }

    /// Moves in order; move `n` leads from snapshot `n` to `n + 1`.
    pub fn moves(&self) -> &Vector<Move> {
        &self.moves
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&GameState> {
        self.snapshots.get(step)
    }

    /// Plays a move from the current snapshot.
    ///
    /// On success any snapshots after the cursor are discarded and the new
    /// state becomes current.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`MoveRejected`]; the history is left as it was.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn play(&mut self, index: usize) -> Result<&GameState, MoveRejected> {
        let current = *self.current();
        let next = self.engine.try_apply_move(&current, index)?;

        let position =
            Position::from_index(index).ok_or(MoveRejected::OutOfRange { index })?;

        let keep = self.step + 1;
        if keep < self.snapshots.len() {
            debug!(discarded = self.snapshots.len() - keep, "Dropping future snapshots");
            self.snapshots.truncate(keep);
            self.moves.truncate(self.step);
        }

        self.moves.push_back(Move::new(current.current_player(), position));
        self.snapshots.push_back(next);
        self.step = keep;

        if cfg!(debug_assertions) && !HistoryConsistent::holds(self) {
            warn!(
                invariant = HistoryConsistent::description(),
                "History invariant violated"
            );
        }

        Ok(self.current())
    }

    /// Moves the cursor to `step` without discarding anything.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Option<&GameState> {
        if step >= self.snapshots.len() {
            debug!(len = self.snapshots.len(), "Jump out of range");
            return None;
        }
        self.step = step;
        Some(self.current())
    }

    /// Steps back one move.
    pub fn undo(&mut self) -> Option<&GameState> {
        let step = self.step.checked_sub(1)?;
        self.jump_to(step)
    }

    /// Steps forward one move, if a later snapshot exists.
    pub fn redo(&mut self) -> Option<&GameState> {
        self.jump_to(self.step + 1)
    }

    /// Label for a step, as shown in a move list.
    pub fn describe(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new(GameEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_new_history() {
        let history = GameHistory::default();
        assert_eq!(history.len(), 1);
        assert_eq!(history.step(), 0);
        assert!(!history.is_empty());
        assert_eq!(history.current(), &GameState::new());
    }

    #[test]
    fn test_rejected_move_leaves_history() {
        let mut history = GameHistory::default();
        history.play(4).unwrap();
        let before = history.clone();
        assert_eq!(
            history.play(4),
            Err(MoveRejected::CellOccupied {
                position: Position::Center
            })
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_undo_redo() {
        let mut history = GameHistory::default();
        history.play(0).unwrap();
        history.play(1).unwrap();

        assert_eq!(history.undo().map(|s| s.current_player()), Some(Mark::O));
        assert_eq!(history.undo().map(|s| s.current_player()), Some(Mark::X));
        assert!(history.undo().is_none());
        assert_eq!(history.step(), 0);

        history.redo().unwrap();
        history.redo().unwrap();
        assert!(history.redo().is_none());
        assert_eq!(history.step(), 2);
    }

    #[test]
    fn test_describe() {
        assert_eq!(GameHistory::describe(0), "Go to game start");
        assert_eq!(GameHistory::describe(3), "Go to move #3");
    }
}
