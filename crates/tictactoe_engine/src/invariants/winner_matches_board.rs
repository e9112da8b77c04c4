//! Winner invariant: `winner` is set iff a line is complete.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: the recorded winner agrees with the board.
pub struct WinnerMatchesBoard;

impl Invariant<GameState> for WinnerMatchesBoard {
    fn holds(state: &GameState) -> bool {
        state.winner() == rules::check_winner(state.board())
    }

    fn description() -> &'static str {
        "Winner is set iff three identical marks fill a winning line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark};

    #[test]
    fn test_new_game_holds() {
        assert!(WinnerMatchesBoard::holds(&GameState::new()));
    }

    #[test]
    fn test_missing_winner_violates() {
        let board: Board = "X..|X..|X..".parse().unwrap();
        let state = GameState::from_parts(board, Mark::O, None);
        assert!(!WinnerMatchesBoard::holds(&state));
    }

    #[test]
    fn test_spurious_winner_violates() {
        let state = GameState::from_parts(Board::new(), Mark::X, Some(Mark::O));
        assert!(!WinnerMatchesBoard::holds(&state));
    }
}
