//! Tests for rule configuration.

use std::io::Write;
use tictactoe_engine::{GameEngine, GameHistory, Mark, MarkPolicy, RuleSet};

#[test]
fn test_rules_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "mark_policy = \"fixed\"").expect("write");
    writeln!(file, "win_detection = false").expect("write");

    let rules = RuleSet::from_file(file.path()).expect("valid rules");
    assert_eq!(rules, RuleSet::single_mark());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "win_detection = false").expect("write");

    let rules = RuleSet::from_file(file.path()).expect("valid rules");
    assert_eq!(*rules.mark_policy(), MarkPolicy::Alternating);
    assert!(!*rules.win_detection());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = RuleSet::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read rules file"));
}

#[test]
fn test_fixed_marks_with_win_detection() {
    let rules = RuleSet::new(MarkPolicy::Fixed, true);
    let mut history = GameHistory::new(GameEngine::new(rules));
    for index in [0, 1, 2] {
        history.play(index).expect("legal move");
    }
    assert_eq!(history.current().winner(), Some(Mark::X));
    assert_eq!(history.current().current_player(), Mark::X);
}

#[test]
fn test_single_mark_fills_board_without_winner() {
    let engine = GameEngine::new(RuleSet::single_mark());
    let state = (0..9).fold(engine.start(), |s, i| engine.apply_move(&s, i));
    assert_eq!(state.board().count(Mark::X), 9);
    assert_eq!(state.winner(), None);
    assert_eq!(state.to_string(), "Draw");
}
