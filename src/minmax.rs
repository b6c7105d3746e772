//! Depth limited minimax search with alpha-beta pruning.
//!
//! The computer ([`Player::AI`]) is the maximizing side, the human
//! ([`Player::HUMAN`]) the minimizing one. Every branch works on its own copy
//! of the board, so the board passed in is never modified.

use rayon::prelude::*;

use crate::board::{Board, Player};
use crate::eval::{HeuristicWeights, score_position};
use crate::rules::{Outcome, is_terminal, outcome};

/// Score of a board won by the computer.
pub const WIN_SCORE: i32 = 10_000;
/// Score of a board won by the human.
pub const LOSS_SCORE: i32 = -WIN_SCORE;
/// Score of a full board without a winner.
pub const DRAW_SCORE: i32 = 0;

/// Bounds of the initial alpha-beta window. Symmetric so that negation can't overflow.
pub const INFINITY: i32 = i32::MAX;
pub const NEG_INFINITY: i32 = -i32::MAX;

#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum SearchError {
    #[error("no column accepts another coin")]
    EmptyMoveSet,
    #[error("the game is already decided")]
    GameOver,
    #[error("search depth must be at least one ply")]
    ZeroDepth,
}

/// Result of a search.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SearchResult {
    /// Chosen column. `None` on terminal boards or when no ply was searched.
    pub column: Option<usize>,
    /// Evaluation from the view of [`Player::AI`].
    pub score: i32,
    /// Number of visited nodes including the root.
    pub nodes: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    weights: HeuristicWeights,
}

impl SearchEngine {
    #[must_use]
    pub const fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub const fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Score of a board where the recursion ends.
    fn leaf_score(&self, board: &Board) -> i32 {
        match outcome(board) {
            Some(Outcome::Won(player)) if player == Player::AI => WIN_SCORE,
            Some(Outcome::Won(_)) => LOSS_SCORE,
            Some(Outcome::Draw) => DRAW_SCORE,
            None => score_position(board, Player::AI, &self.weights),
        }
    }

    /// minimax with alpha-beta pruning.
    ///
    /// Children are visited in ascending column order. A column replaces the
    /// current best only if it is strictly better, so on ties the first
    /// column seen wins.
    #[must_use]
    pub fn minimax(
        &self,
        board: &Board,
        depth: u32,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        let mut nodes = 0;
        let (column, score) = self.alpha_beta(board, depth, alpha, beta, maximizing, &mut nodes);
        SearchResult {
            column,
            score,
            nodes,
        }
    }

    fn alpha_beta(
        &self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> (Option<usize>, i32) {
        *nodes += 1;

        if depth == 0 || is_terminal(board) {
            return (None, self.leaf_score(board));
        }

        let player = if maximizing { Player::AI } else { Player::HUMAN };
        let mut best_col = None;
        let mut best_score = if maximizing { NEG_INFINITY } else { INFINITY };

        for col in board.valid_columns() {
            let mut child = *board;
            // valid_columns only yields columns with a free row
            let Some(row) = board.next_open_row(col) else {
                continue;
            };
            child.place(row, col, player);

            let (_, score) = self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing, nodes);

            if maximizing {
                if best_col.is_none() || score > best_score {
                    best_score = score;
                    best_col = Some(col);
                }
                alpha = alpha.max(best_score);
            } else {
                if best_col.is_none() || score < best_score {
                    best_score = score;
                    best_col = Some(col);
                }
                beta = beta.min(best_score);
            }

            if alpha >= beta {
                break;
            }
        }

        (best_col, best_score)
    }

    /// Plain minimax without pruning. Visits the full tree up to `depth`.
    #[must_use]
    pub fn minimax_unpruned(&self, board: &Board, depth: u32, maximizing: bool) -> SearchResult {
        let mut nodes = 0;
        let (column, score) = self.full_width(board, depth, maximizing, &mut nodes);
        SearchResult {
            column,
            score,
            nodes,
        }
    }

    fn full_width(
        &self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> (Option<usize>, i32) {
        *nodes += 1;

        if depth == 0 || is_terminal(board) {
            return (None, self.leaf_score(board));
        }

        let player = if maximizing { Player::AI } else { Player::HUMAN };
        let better = |new: i32, best: i32| if maximizing { new > best } else { new < best };
        let mut best: Option<(usize, i32)> = None;

        for col in board.valid_columns() {
            let mut child = *board;
            let Some(row) = board.next_open_row(col) else {
                continue;
            };
            child.place(row, col, player);

            let (_, score) = self.full_width(&child, depth - 1, !maximizing, nodes);
            if best.is_none_or(|(_, best_score)| better(score, best_score)) {
                best = Some((col, score));
            }
        }

        match best {
            Some((col, score)) => (Some(col), score),
            None => (None, self.leaf_score(board)),
        }
    }

    fn check_root(board: &Board, depth: u32) -> Result<(), SearchError> {
        if depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        if board.valid_columns().next().is_none() {
            return Err(SearchError::EmptyMoveSet);
        }
        if is_terminal(board) {
            return Err(SearchError::GameOver);
        }
        Ok(())
    }

    /// Searches the best column for the computer.
    pub fn best_move(&self, board: &Board, depth: u32) -> Result<SearchResult, SearchError> {
        Self::check_root(board, depth)?;

        let result = self.minimax(board, depth, NEG_INFINITY, INFINITY, true);
        tracing::debug!(
            column = ?result.column,
            score = result.score,
            nodes = result.nodes,
            depth,
            "search finished"
        );

        if result.column.is_none() {
            return Err(SearchError::EmptyMoveSet);
        }
        Ok(result)
    }

    /// Like [`Self::best_move`] but searches the root columns in parallel.
    ///
    /// Every root child gets its own full alpha-beta window, so there are no
    /// cutoffs between root siblings. The results are folded in ascending
    /// column order with the same strict improvement rule as the sequential
    /// search, which yields the same column and score.
    pub fn best_move_parallel(
        &self,
        board: &Board,
        depth: u32,
    ) -> Result<SearchResult, SearchError> {
        Self::check_root(board, depth)?;

        let children = board
            .valid_columns()
            .filter_map(|col| {
                let row = board.next_open_row(col)?;
                let mut child = *board;
                child.place(row, col, Player::AI);
                Some((col, child))
            })
            .collect::<Vec<_>>();

        let scored = children
            .par_iter()
            .map(|(col, child)| {
                let result = self.minimax(child, depth - 1, NEG_INFINITY, INFINITY, false);
                (*col, result.score, result.nodes)
            })
            .collect::<Vec<_>>();

        let mut result = SearchResult {
            column: None,
            score: NEG_INFINITY,
            nodes: 1,
        };
        for (col, score, nodes) in scored {
            result.nodes += nodes;
            if result.column.is_none() || score > result.score {
                result.column = Some(col);
                result.score = score;
            }
        }

        tracing::debug!(
            column = ?result.column,
            score = result.score,
            nodes = result.nodes,
            depth,
            "parallel search finished"
        );

        if result.column.is_none() {
            return Err(SearchError::EmptyMoveSet);
        }
        Ok(result)
    }
}
