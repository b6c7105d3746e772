//! Win and end-of-game detection.

use crate::board::{Board, Direction, Player, WINDOW_LEN};

/// How a finished game ended.
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Eq)]
pub enum Outcome {
    Won(Player),
    /// The game field is full without a winner.
    Draw,
}

fn has_won_in(board: &Board, player: Player, direction: Direction) -> bool {
    let series = [Some(player); WINDOW_LEN];
    board.windows(direction).any(|window| window == series)
}

/// Check if `player` has four in a row in any direction.
#[must_use]
pub fn has_won(board: &Board, player: Player) -> bool {
    Direction::ALL
        .into_iter()
        .any(|direction| has_won_in(board, player, direction))
}

/// Returns whether the game is over: a player won or no column takes another coin.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Player::Player1)
        || has_won(board, Player::Player2)
        || board.valid_columns().next().is_none()
}

/// Returns how the game ended, or `None` if it continues.
#[must_use]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if has_won(board, Player::AI) {
        Some(Outcome::Won(Player::AI))
    } else if has_won(board, Player::HUMAN) {
        Some(Outcome::Won(Player::HUMAN))
    } else if board.valid_columns().next().is_none() {
        Some(Outcome::Draw)
    } else {
        None
    }
}
