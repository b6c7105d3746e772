//! Game session: board, whose turn it is and whether the game is over.

use crate::board::{Board, BoardError, Player};
use crate::rules::{Outcome, outcome};

/// The state after a coin was inserted into the board.
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Eq)]
pub enum GameState {
    /// Game continues.
    InProgress,
    /// Player won with that insertion.
    Won(Player),
    /// The game field is full without a winner.
    Draw,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum GameError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("the game is over")]
    GameOver,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidColumn(col) => Self::InvalidColumn(col),
            BoardError::ColumnFull(col) => Self::ColumnFull(col),
        }
    }
}

/// Game with all its state.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Game {
    board: Board,
    current: Player,
    round: usize,
    state: GameState,
}

impl Game {
    #[must_use]
    pub const fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            current: first,
            round: 0,
            state: GameState::InProgress,
        }
    }

    /// Drops a coin of the current player into `col`.
    ///
    /// The turn passes to the opponent only while the game continues.
    pub fn play(&mut self, col: usize) -> Result<GameState, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let player = self.current;
        self.board.drop_piece(col, player)?;
        self.round += 1;

        self.state = match outcome(&self.board) {
            Some(Outcome::Won(winner)) => GameState::Won(winner),
            Some(Outcome::Draw) => GameState::Draw,
            None => {
                self.current = player.opponent();
                GameState::InProgress
            }
        };

        if self.is_over() {
            tracing::info!(state = ?self.state, rounds = self.round, "game over");
        }
        Ok(self.state)
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move, or the one who made the last move once the game is over.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current
    }

    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ROWS;

    #[test]
    fn turns_alternate() {
        let mut game = Game::new(Player::HUMAN);
        assert_eq!(game.current_player(), Player::HUMAN);
        assert_eq!(game.play(0), Ok(GameState::InProgress));
        assert_eq!(game.current_player(), Player::AI);
        assert_eq!(game.play(1), Ok(GameState::InProgress));
        assert_eq!(game.current_player(), Player::HUMAN);
        assert_eq!(game.round(), 2);
        assert_eq!(game.board().cell(0, 0), Some(Player::HUMAN));
        assert_eq!(game.board().cell(0, 1), Some(Player::AI));
    }

    #[test]
    fn rejected_moves_keep_the_turn() {
        let mut game = Game::new(Player::AI);
        assert_eq!(game.play(9), Err(GameError::InvalidColumn(9)));
        assert_eq!(game.current_player(), Player::AI);

        for _ in 0..ROWS {
            game.play(2).unwrap();
        }
        let current = game.current_player();
        assert_eq!(game.play(2), Err(GameError::ColumnFull(2)));
        assert_eq!(game.current_player(), current);
        assert_eq!(game.round(), ROWS);
    }

    #[test]
    fn game_ends_with_a_win() {
        let mut game = Game::new(Player::HUMAN);
        for col in [0, 6, 1, 6, 2, 5] {
            assert_eq!(game.play(col), Ok(GameState::InProgress));
        }
        assert_eq!(game.play(3), Ok(GameState::Won(Player::HUMAN)));
        assert!(game.is_over());
        assert_eq!(game.current_player(), Player::HUMAN);
        assert_eq!(game.play(4), Err(GameError::GameOver));
    }
}
