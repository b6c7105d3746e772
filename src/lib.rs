//! A Connect Four engine.
//!
//! The board holds the coins of both players on a 7x6 grid, the rules decide
//! whether a game is over, the heuristic rates undecided positions and the
//! minimax search picks the computer's column.
//!
//! ```
//! use connect_four_engine::{Board, Player, SearchEngine};
//!
//! let mut board = Board::new();
//! board.drop_piece(3, Player::HUMAN).unwrap();
//!
//! let result = SearchEngine::default().best_move(&board, 4).unwrap();
//! assert!(board.is_valid_move(result.column.unwrap()));
//! ```

#![deny(
    clippy::all,
    clippy::nursery,
    clippy::must_use_candidate,
)]
// now allow a few rules which are denied by the above statement
#![allow(
    clippy::redundant_pub_crate,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation
)]
#![deny(missing_debug_implementations)]

pub mod ai_player;
pub mod board;
pub mod config;
pub mod eval;
pub mod game;
pub mod minmax;
pub mod rules;

pub use ai_player::{Strategy, choose_move, greedy_move, random_move};
pub use board::{Board, BoardError, COLS, Direction, Player, ROWS, WINDOW_LEN};
pub use config::{ConfigError, EngineConfig};
pub use eval::{HeuristicWeights, evaluate_window, score_position};
pub use game::{Game, GameError, GameState};
pub use minmax::{
    DRAW_SCORE, INFINITY, LOSS_SCORE, NEG_INFINITY, SearchEngine, SearchError, SearchResult,
    WIN_SCORE,
};
pub use rules::{Outcome, has_won, is_terminal, outcome};
