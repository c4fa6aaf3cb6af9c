//! Default board dimensions and runtime configuration names.

/// Number of rows on the default board.
pub const BOARD_HEIGHT: usize = 3;
/// Number of columns on the default board.
pub const BOARD_WIDTH: usize = 3;
/// Number of mines hidden on the default board.
pub const MINE_COUNT: usize = 2;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "MINESWEEPER_LOG";
