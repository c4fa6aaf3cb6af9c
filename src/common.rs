//! Common types for Minesweeper: click outcomes, game status and errors.

use core::fmt;

/// Outcome of clicking a single cell.
///
/// Clicking is a query: the caller decides whether to mark the cell revealed
/// and whether the reveal counts toward the win condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// The cell was already revealed; nothing changes.
    AlreadyClicked,
    /// A hidden cell without a mine.
    Safe,
    /// A hidden cell holding a mine.
    Mine,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Errors returned when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `height * width` does not fit in a `usize`.
    BoardTooLarge { height: usize, width: usize },
    /// At least one cell must stay free of mines.
    TooManyMines { mines: usize, cells: usize },
    /// A fixed mine position lies outside the grid.
    MineOutOfBounds { row: usize, col: usize },
    /// The same fixed mine position was given twice.
    DuplicateMine { row: usize, col: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooLarge { height, width } => {
                write!(f, "a {}x{} board has too many cells", height, width)
            }
            ConfigError::TooManyMines { mines, cells } => write!(
                f,
                "number of mines ({}) must be less than the number of cells ({})",
                mines, cells
            ),
            ConfigError::MineOutOfBounds { row, col } => {
                write!(f, "mine position ({}, {}) is outside the board", row, col)
            }
            ConfigError::DuplicateMine { row, col } => {
                write!(f, "mine position ({}, {}) given more than once", row, col)
            }
        }
    }
}

/// Errors produced while parsing a `row col` input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Fewer than two tokens on the line.
    MissingCoordinate { found: usize },
    /// A token was not an integer.
    InvalidNumber(alloc::string::String),
}

impl fmt::Display for InputParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputParseError::MissingCoordinate { found } => write!(
                f,
                "expected a row and a column separated by a space, got {} value(s)",
                found
            ),
            InputParseError::InvalidNumber(token) => {
                write!(f, "'{}' is not a valid row or column number", token)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for InputParseError {}
