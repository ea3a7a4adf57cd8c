//! Connect-four board implementing the [`Position`] interface
//!
//! The board is 7 columns by 6 rows; each column is a stack of tokens from
//! bottom to top. Dropping a token is a pure operation returning a fresh
//! board, and the win check is anchored at the most recently placed token
//! of a column, scanning the four line orientations outward.

use std::fmt;

use crate::{position::Position, Result, SearchError};

/// Number of columns on the board
pub const COLUMNS: usize = 7;

/// Number of rows in each column
pub const ROWS: usize = 6;

/// Run length needed to win
const WIN_LENGTH: usize = 4;

/// A player token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    X,
    O,
}

impl Token {
    /// Returns the opposing token
    pub fn other(self) -> Token {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::X => write!(f, "X"),
            Token::O => write!(f, "O"),
        }
    }
}

/// A connect-four position: the board plus the player to move
///
/// Every constructor and move application builds its own board state; no
/// two positions ever share storage.
#[derive(Debug, Clone)]
pub struct ConnectFour {
    /// Player whose turn it is
    to_move: Token,

    /// Token stacks, bottom to top, one per column
    columns: [Vec<Token>; COLUMNS],
}

impl ConnectFour {
    /// Creates an empty board with `first` to move
    pub fn new(first: Token) -> Self {
        ConnectFour {
            to_move: first,
            columns: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// The player whose turn it is
    pub fn to_move(&self) -> Token {
        self.to_move
    }

    /// The token at (column, row counted from the bottom), if any
    pub fn token_at(&self, column: usize, row: usize) -> Option<Token> {
        self.columns.get(column)?.get(row).copied()
    }

    /// Columns that still have room for a token, in ascending order
    ///
    /// This ordering is the freedom-index contract for the engine.
    pub fn available_columns(&self) -> Vec<usize> {
        (0..COLUMNS)
            .filter(|&column| self.columns[column].len() < ROWS)
            .collect()
    }

    /// Drops the current player's token into `column`, returning the new
    /// position with the turn passed to the opponent
    ///
    /// Fails with [`SearchError::InvalidMove`] when the column does not
    /// exist or is already full.
    pub fn drop_token(&self, column: usize) -> Result<ConnectFour> {
        if column >= COLUMNS || self.columns[column].len() >= ROWS {
            return Err(SearchError::InvalidMove(format!(
                "column {column} is not open"
            )));
        }

        let mut next = self.clone();
        next.columns[column].push(self.to_move);
        next.to_move = self.to_move.other();
        Ok(next)
    }

    /// Returns true if the topmost token in `column` completes four in a row
    ///
    /// Each of the four orientations is checked as a pair of opposite
    /// directions; the anchor token is counted by both sides of a pair, so
    /// the combined run length is corrected by one before comparing.
    pub fn check_win(&self, column: usize) -> bool {
        if column >= COLUMNS || self.columns[column].is_empty() {
            return false;
        }

        const DIRECTION_PAIRS: [[(isize, isize); 2]; 4] = [
            [(0, -1), (0, 1)],   // vertical
            [(-1, 0), (1, 0)],   // horizontal
            [(1, -1), (-1, 1)],  // diagonal /
            [(-1, -1), (1, 1)],  // diagonal \
        ];

        DIRECTION_PAIRS.iter().any(|&[down, up]| {
            self.count_run(column, down) + self.count_run(column, up) - 1 >= WIN_LENGTH
        })
    }

    /// Counts contiguous same-token cells from the topmost token of
    /// `column` along one direction, anchor included
    fn count_run(&self, column: usize, (step_column, step_row): (isize, isize)) -> usize {
        let anchor_row = self.columns[column].len() - 1;
        let token = self.columns[column][anchor_row];

        let mut col = column as isize;
        let mut row = anchor_row as isize;
        let mut run = 0;
        for _ in 0..WIN_LENGTH {
            if col < 0 || col >= COLUMNS as isize || row < 0 || row >= ROWS as isize {
                break;
            }
            match self.columns[col as usize].get(row as usize) {
                Some(&cell) if cell == token => {}
                _ => break,
            }
            run += 1;
            col += step_column;
            row += step_row;
        }
        run
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        ConnectFour::new(Token::X)
    }
}

impl Position for ConnectFour {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        self.available_columns()
    }

    fn apply(&self, column: &usize) -> Result<Self> {
        self.drop_token(*column)
    }

    fn is_winning_move(&self, column: &usize) -> bool {
        self.check_win(*column)
    }
}

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for column in 0..COLUMNS {
                if column > 0 {
                    write!(f, " ")?;
                }
                match self.columns[column].get(row) {
                    Some(token) => write!(f, "{token}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        for column in 0..COLUMNS {
            if column > 0 {
                write!(f, " ")?;
            }
            write!(f, "{column}")?;
        }
        Ok(())
    }
}
