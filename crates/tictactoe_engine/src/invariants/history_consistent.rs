//! History invariant: each snapshot is its predecessor plus the recorded move.

use super::super::{GameHistory, Square};
use super::Invariant;

/// Invariant: the snapshot timeline and move list agree.
///
/// - The first snapshot has an empty board and no winner.
/// - Snapshot `n + 1` equals snapshot `n` with move `n` placed on an empty
///   square by the mark that was to move.
/// - The cursor points at an existing snapshot.
pub struct HistoryConsistent;

impl Invariant<GameHistory> for HistoryConsistent {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        let moves = history.moves();

        let Some(first) = snapshots.front() else {
            return false;
        };
        if first.board().filled() != 0 || first.winner().is_some() {
            return false;
        }
        if moves.len() + 1 != snapshots.len() || history.step() >= snapshots.len() {
            return false;
        }

        snapshots
            .iter()
            .zip(snapshots.iter().skip(1))
            .zip(moves.iter())
            .all(|((before, after), mv)| {
                mv.mark == before.current_player()
                    && before.board().get(mv.position) == Square::Empty
                    && before.board().with_mark(mv.position, mv.mark) == *after.board()
            })
    }

    fn description() -> &'static str {
        "Each snapshot is the previous one plus the recorded move"
    }
}
