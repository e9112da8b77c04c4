//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: marks alternate starting with X.
///
/// X leads O by zero or one mark, and the mark to move is the one behind.
pub struct AlternatingMarks;

impl Invariant<GameState> for AlternatingMarks {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);

        match (x == o, x == o + 1) {
            (true, _) => state.current_player() == Mark::X,
            (_, true) => state.current_player() == Mark::O,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...)"
    }
}
