//! Positional heuristic for boards that are not decided yet.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CENTER_COL, Direction, Player, ROWS, Window};

/// Weights of the window heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Window filled with own coins.
    pub four: i32,
    /// Three own coins and one empty cell.
    pub three: i32,
    /// Two own coins and two empty cells.
    pub two: i32,
    /// Two opponent coins and two empty cells.
    pub opponent_two: i32,
    /// Per own coin in the center column.
    pub center: i32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            four: 1000,
            three: 30,
            two: 15,
            opponent_two: -12,
            center: 3,
        }
    }
}

fn count(window: &Window, cell: Option<Player>) -> usize {
    window.iter().filter(|&&c| c == cell).count()
}

/// Scores a single window from the view of `player`.
#[must_use]
pub fn evaluate_window(window: &Window, player: Player, weights: &HeuristicWeights) -> i32 {
    let own = count(window, Some(player));
    let empty = count(window, None);
    let opponent = count(window, Some(player.opponent()));

    let mut score = match (own, empty) {
        (4, _) => weights.four,
        (3, 1) => weights.three,
        (2, 2) => weights.two,
        _ => 0,
    };

    if opponent == 2 && empty == 2 {
        score += weights.opponent_two;
    }

    score
}

/// Estimates the advantage of `player` on a board without a winner.
///
/// Sum of the center column bias and the score of every window along all four directions.
#[must_use]
pub fn score_position(board: &Board, player: Player, weights: &HeuristicWeights) -> i32 {
    let center = (0..ROWS)
        .filter(|&row| board.cell(row, CENTER_COL) == Some(player))
        .count() as i32
        * weights.center;

    let windows: i32 = Direction::ALL
        .into_iter()
        .flat_map(|direction| board.windows(direction))
        .map(|window| evaluate_window(&window, player, weights))
        .sum();

    center + windows
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Player> = Some(Player::Player1);
    const O: Option<Player> = Some(Player::Player2);
    const E: Option<Player> = None;

    #[test]
    fn window_scores() {
        let w = HeuristicWeights::default();
        assert_eq!(evaluate_window(&[O, O, O, O], Player::Player2, &w), 1000);
        assert_eq!(evaluate_window(&[O, O, E, O], Player::Player2, &w), 30);
        assert_eq!(evaluate_window(&[E, O, O, E], Player::Player2, &w), 15);
        assert_eq!(evaluate_window(&[X, E, X, E], Player::Player2, &w), -12);
        assert_eq!(evaluate_window(&[X, E, X, E], Player::Player1, &w), 15);
        assert_eq!(evaluate_window(&[O, X, O, E], Player::Player2, &w), 0);
        assert_eq!(evaluate_window(&[X, X, X, E], Player::Player2, &w), 0);
        assert_eq!(evaluate_window(&[E, E, E, O], Player::Player2, &w), 0);
        assert_eq!(evaluate_window(&[E, E, E, E], Player::Player2, &w), 0);
    }

    #[test]
    fn empty_board_scores_zero() {
        let w = HeuristicWeights::default();
        let board = Board::new();
        assert_eq!(score_position(&board, Player::Player1, &w), 0);
        assert_eq!(score_position(&board, Player::Player2, &w), 0);
    }

    #[test]
    fn single_center_coin_scores_center_bias() {
        let w = HeuristicWeights::default();
        let mut board = Board::new();
        board.drop_piece(CENTER_COL, Player::Player2).unwrap();
        assert_eq!(score_position(&board, Player::Player2, &w), 3);
        assert_eq!(score_position(&board, Player::Player1, &w), 0);

        let mut board = Board::new();
        board.drop_piece(0, Player::Player2).unwrap();
        assert_eq!(score_position(&board, Player::Player2, &w), 0);
    }

    #[test]
    fn open_pair_of_opponent_is_penalized() {
        let w = HeuristicWeights::default();
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XX.....",
        ]);
        // Only the leftmost horizontal window holds both coins.
        assert_eq!(score_position(&board, Player::Player2, &w), -12);
        assert_eq!(score_position(&board, Player::Player1, &w), 15);
    }

    #[test]
    fn completing_a_line_increases_score() {
        let w = HeuristicWeights::default();
        let mut board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "OOO....",
        ]);
        let before = score_position(&board, Player::Player2, &w);
        board.drop_piece(3, Player::Player2).unwrap();
        let after = score_position(&board, Player::Player2, &w);
        assert!(after - before >= w.four - w.three);
    }

    #[test]
    fn custom_weights_are_used() {
        let w = HeuristicWeights {
            center: 10,
            ..HeuristicWeights::default()
        };
        let mut board = Board::new();
        board.drop_piece(CENTER_COL, Player::Player1).unwrap();
        board.drop_piece(CENTER_COL, Player::Player1).unwrap();
        // Vertical window rows 0..4 of the center column holds an open pair.
        assert_eq!(score_position(&board, Player::Player1, &w), 20 + 15);
    }
}
