//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// The eight winning lines, in scan order: rows, columns, diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the mark that completed it.
#[instrument(skip(board), fields(board = %board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    WINNING_LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((mark, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first line (in [`WINNING_LINES`] order) holding
/// three identical marks, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX......".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_every_line() {
        for line in WINNING_LINES {
            let board = line
                .iter()
                .fold(Board::new(), |b, pos| b.with_mark(*pos, Mark::O));
            assert_eq!(winning_line(&board), Some((Mark::O, line)));
        }
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board: Board = "XXO......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_scan_order_reports_first_line() {
        // Unreachable in play: both rows complete.
        let board: Board = "XXX|...|OOO".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::X));
        let board: Board = "OOO|...|XXX".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
    }
}
