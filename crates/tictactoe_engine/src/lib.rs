//! Tic-tac-toe rules engine.
//!
//! Pure move application and win detection over immutable snapshots. A UI
//! layer owns the [`GameState`] values, calls [`apply_move`] on each user
//! interaction and redraws from whatever comes back.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: win and draw detection over a board
//! - **Engine**: [`GameEngine`] applies moves under a [`RuleSet`]
//! - **History**: [`GameHistory`] keeps every snapshot for undo and replay
//! - **Invariants**: properties checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameState, Mark, apply_move};
//!
//! let state = GameState::new();
//! let state = [0, 3, 4, 5, 8]
//!     .into_iter()
//!     .fold(state, |s, index| apply_move(&s, index));
//!
//! assert_eq!(state.winner(), Some(Mark::X));
//! assert_eq!(state.to_string(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveRejected};
pub use config::{ConfigError, MarkPolicy, RuleSet};
pub use engine::{GameEngine, apply_move, detect_winner};
pub use history::GameHistory;
pub use position::Position;
pub use state::GameState;
pub use types::{Board, GameStatus, Mark, ParseBoardError, Square};
