use crate::{
    board::Board,
    common::{ClickResult, GameStatus},
};
use alloc::string::String;

/// Core game logic: applies clicks to the board and tracks win/loss.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    remaining_safe_cells: usize,
    lost: bool,
}

impl Game {
    /// Start a game on a freshly built board.
    pub fn new(board: Board) -> Self {
        let remaining_safe_cells = board.safe_cell_count();
        Self {
            board,
            remaining_safe_cells,
            lost: false,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Safe cells still hidden.
    pub fn remaining_safe_cells(&self) -> usize {
        self.remaining_safe_cells
    }

    /// Returns `true` once a mine has been revealed.
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// Click the cell at `(row, col)`.
    ///
    /// Returns `None` for positions outside the board and for any click after
    /// the game has been won or lost; those leave the game untouched.
    pub fn click(&mut self, row: isize, col: isize) -> Option<ClickResult> {
        if self.status() != GameStatus::InProgress {
            log::debug!("ignoring click at ({}, {}) on a finished game", row, col);
            return None;
        }
        if !self.board.is_valid_position(row, col) {
            log::debug!("ignoring out-of-bounds click at ({}, {})", row, col);
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        let result = self.board.click(row, col)?;
        match result {
            ClickResult::Mine => {
                self.board.reveal(row, col);
                self.lost = true;
                log::info!("mine revealed at ({}, {})", row, col);
            }
            ClickResult::Safe => {
                self.board.reveal(row, col);
                self.remaining_safe_cells = self.remaining_safe_cells.saturating_sub(1);
                log::debug!(
                    "revealed ({}, {}), {} safe cells left",
                    row,
                    col,
                    self.remaining_safe_cells
                );
            }
            ClickResult::AlreadyClicked => {}
        }
        Some(result)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.lost {
            GameStatus::Lost
        } else if self.remaining_safe_cells == 0 {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Force-reveal the whole board and render it.
    pub fn finish(&mut self) -> String {
        self.board.reveal_all()
    }
}
