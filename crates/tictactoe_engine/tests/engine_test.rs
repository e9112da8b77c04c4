//! Tests for move application and win detection.

use tictactoe_engine::{
    Board, GameEngine, GameState, GameStatus, Mark, MoveRejected, Position, apply_move,
    detect_winner,
};

fn play(moves: &[usize]) -> GameState {
    moves
        .iter()
        .fold(GameState::new(), |state, &index| apply_move(&state, index))
}

#[test]
fn test_top_row_of_x_wins() {
    let board: Board = "XXX|...|...".parse().expect("valid board");
    assert_eq!(detect_winner(&board), Some(Mark::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOX|XOO|OXX".parse().expect("valid board");
    assert_eq!(detect_winner(&board), None);

    let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.board(), &board);
    assert_eq!(state.winner(), None);
    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_out_of_range_is_noop() {
    let state = play(&[4]);
    assert_eq!(apply_move(&state, 9), state);
    assert_eq!(apply_move(&state, usize::MAX), state);
}

#[test]
fn test_occupied_rejection_is_idempotent() {
    let state = play(&[4, 0]);
    let first = apply_move(&state, 0);
    let second = apply_move(&first, 0);
    assert_eq!(first, state);
    assert_eq!(second, state);
}

#[test]
fn test_move_after_win_is_noop() {
    // X: 0, 1, 2 (top row); O: 3, 4
    let won = play(&[0, 3, 1, 4, 2]);
    assert_eq!(won.winner(), Some(Mark::X));

    for index in [5, 6, 7, 8, 9] {
        let after = apply_move(&won, index);
        assert_eq!(after, won);
        assert_eq!(after.winner(), Some(Mark::X));
    }
    assert_eq!(
        GameEngine::default().try_apply_move(&won, 5),
        Err(MoveRejected::GameOver)
    );
}

#[test]
fn test_diagonal_wins_exactly_on_completing_move() {
    // A, B, A, B, A with A filling 0, 4, 8
    let moves = [0, 1, 4, 2, 8];
    let mut state = GameState::new();
    for (n, &index) in moves.iter().enumerate() {
        state = apply_move(&state, index);
        if n < moves.len() - 1 {
            assert_eq!(state.winner(), None, "no winner before move {}", n + 1);
        }
    }
    assert_eq!(state.winner(), Some(Mark::X));
}

#[test]
fn test_input_state_is_never_mutated() {
    let before = play(&[4]);
    let snapshot = before;
    let after = apply_move(&before, 0);

    assert_eq!(before, snapshot);
    assert_ne!(after, before);
    assert!(before.board().is_empty(Position::TopLeft));
}

#[test]
fn test_o_can_win() {
    // X: 0, 1, 8; O: 2, 4, 6 (anti-diagonal)
    let state = play(&[0, 2, 1, 4, 8, 6]);
    assert_eq!(state.winner(), Some(Mark::O));
    assert_eq!(state.to_string(), "Winner: O");
}

#[test]
fn test_status_line_while_playing() {
    assert_eq!(play(&[]).to_string(), "Next player: X");
    assert_eq!(play(&[4]).to_string(), "Next player: O");
}

#[test]
fn test_state_serializes() {
    let state = play(&[0, 4, 8]);
    let json = serde_json::to_string(&state).expect("serialize");
    let back: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, state);
}
