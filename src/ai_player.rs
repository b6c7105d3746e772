use clap::ValueEnum;
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::eval::{HeuristicWeights, score_position};
use crate::minmax::{SearchEngine, SearchError};

/// How the computer picks its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Alpha-beta search to the configured depth.
    #[default]
    Minimax,
    /// Best heuristic score after one own move.
    Greedy,
    /// Any valid column.
    Random,
}

/// One ply look-ahead: drop `player` into every valid column and keep the
/// column with the strictly highest heuristic score.
#[must_use]
pub fn greedy_move(board: &Board, player: Player, weights: &HeuristicWeights) -> Option<usize> {
    let mut best_score = -100_000;
    let mut best_col = None;

    for col in board.valid_columns() {
        let mut child = *board;
        let Some(row) = board.next_open_row(col) else {
            continue;
        };
        child.place(row, col, player);

        let score = score_position(&child, player, weights);
        if score > best_score {
            best_score = score;
            best_col = Some(col);
        }
    }

    best_col
}

/// Uniformly random valid column.
#[must_use]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.valid_columns().choose(rng)
}

/// Picks the computer's column with the given strategy.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    strategy: Strategy,
    engine: &SearchEngine,
    depth: u32,
    parallel: bool,
    rng: &mut R,
) -> Result<usize, SearchError> {
    let column = match strategy {
        Strategy::Minimax if parallel => engine.best_move_parallel(board, depth)?.column,
        Strategy::Minimax => engine.best_move(board, depth)?.column,
        Strategy::Greedy => greedy_move(board, Player::AI, engine.weights()),
        Strategy::Random => random_move(board, rng),
    };

    column.ok_or(SearchError::EmptyMoveSet)
}
