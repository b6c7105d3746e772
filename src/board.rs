//! The 7x6 game board.

use core::ops::Range;

/// Number of rows. Row 0 is the bottom of the board.
pub const ROWS: usize = 6;
/// Number of columns.
pub const COLS: usize = 7;
/// Number of coins in a row to win the game.
pub const WINDOW_LEN: usize = 4;

/// Column that receives the center bias of the heuristic.
pub const CENTER_COL: usize = COLS / 2;

#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum BoardError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),
    /// Column is full.
    #[error("column {0} is full")]
    ColumnFull(usize),
}

#[derive(Copy, Clone, PartialOrd, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    /// The human side, minimizing in the search.
    Player1,
    /// The computer side, maximizing in the search.
    Player2,
}

impl Player {
    pub const HUMAN: Self = Self::Player1;
    pub const AI: Self = Self::Player2;

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Player1 => 'X',
            Self::Player2 => 'O',
        }
    }
}

/// The four line directions a window can run along.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// `/`: row+1, col+1
    PositiveDiagonal,
    /// `\`: row-1, col+1
    NegativeDiagonal,
}

impl Direction {
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::PositiveDiagonal,
        Self::NegativeDiagonal,
    ];

    /// Step from one cell of a window to the next as (row, col).
    const fn step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::PositiveDiagonal => (1, 1),
            Self::NegativeDiagonal => (-1, 1),
        }
    }

    /// Rows a window of this direction can start in.
    const fn start_rows(self) -> Range<usize> {
        match self {
            Self::Horizontal => 0..ROWS,
            Self::Vertical | Self::PositiveDiagonal => 0..ROWS - WINDOW_LEN + 1,
            Self::NegativeDiagonal => WINDOW_LEN - 1..ROWS,
        }
    }

    /// Columns a window of this direction can start in.
    const fn start_cols(self) -> Range<usize> {
        match self {
            Self::Vertical => 0..COLS,
            Self::Horizontal | Self::PositiveDiagonal | Self::NegativeDiagonal => {
                0..COLS - WINDOW_LEN + 1
            }
        }
    }
}

/// A run of [`WINDOW_LEN`] consecutive cells.
pub type Window = [Option<Player>; WINDOW_LEN];

/// Gameboard.
///
/// The board is `Copy`: the search explores hypothetical futures on
/// independent copies and never touches the caller's board.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Board(
    /*
     * Board: rows --> col --> field
     * Technical indices correspond to the logical indices:
     * (row=0,col=0) <==> bottom left of game board
     */
    [[Option<Player>; COLS]; ROWS],
);

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with all cells empty.
    #[must_use]
    pub const fn new() -> Self {
        Self([[None; COLS]; ROWS])
    }

    #[must_use]
    pub const fn cells(&self) -> &[[Option<Player>; COLS]; ROWS] {
        &self.0
    }

    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.0[row][col]
    }

    /// Returns whether a coin can still be dropped into `col`.
    ///
    /// # Panics
    /// If `col` is not a column of the board.
    #[must_use]
    pub fn is_valid_move(&self, col: usize) -> bool {
        assert!(col < COLS, "column {col} out of range");
        self.0[ROWS - 1][col].is_none()
    }

    /// Returns the lowest empty row in the selected column.
    ///
    /// Returns `None` if there are no more free slots.
    #[must_use]
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).find(|&row| self.0[row][col].is_none())
    }

    /// Puts a coin into the given cell. The caller guarantees that the cell is
    /// the landing row of `col`, see [`Self::next_open_row`].
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert_eq!(self.next_open_row(col), Some(row));
        self.0[row][col] = Some(player);
    }

    /// Emits the column indices where moves are legal, in ascending order.
    pub fn valid_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(|&col| self.is_valid_move(col))
    }

    /// Drops a coin into `col` and returns the row it landed in.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, BoardError> {
        if col >= COLS {
            return Err(BoardError::InvalidColumn(col));
        }

        let row = self.next_open_row(col).ok_or(BoardError::ColumnFull(col))?;
        self.place(row, col, player);
        Ok(row)
    }

    /// Number of coins on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.0.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Emits every window of [`WINDOW_LEN`] cells along `direction`.
    pub fn windows(&self, direction: Direction) -> impl Iterator<Item = Window> + '_ {
        let (row_step, col_step) = direction.step();
        direction
            .start_rows()
            .flat_map(move |row| direction.start_cols().map(move |col| (row, col)))
            .map(move |(row, col)| {
                core::array::from_fn(|i| {
                    let r = row.wrapping_add_signed(row_step * i as isize);
                    let c = col.wrapping_add_signed(col_step * i as isize);
                    self.0[r][c]
                })
            })
    }

    /// Builds a board from rows written top row first, as printed.
    /// `X` is [`Player::Player1`], `O` is [`Player::Player2`], anything else is empty.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Self::new();
        for (i, line) in rows.iter().enumerate() {
            let row = ROWS - 1 - i;
            for (col, symbol) in line.chars().take(COLS).enumerate() {
                board.0[row][col] = match symbol {
                    'X' => Some(Player::Player1),
                    'O' => Some(Player::Player2),
                    _ => None,
                };
            }
        }
        board
    }
}
