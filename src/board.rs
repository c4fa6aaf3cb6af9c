//! Game board: a row-major grid of cells with mines and neighbour counts.

use crate::cell::Cell;
use crate::common::{ClickResult, ConfigError};
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

/// Offsets of the eight neighbours of a cell, as `(row, col)` deltas.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    mine_count: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board with `mine_count` mines placed uniformly at random.
    ///
    /// Fails unless at least one cell stays free of mines.
    pub fn build<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        mine_count: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let len = check_mine_count(height, width, mine_count)?;
        let indices = rand::seq::index::sample(rng, len, mine_count);
        let board = Self::from_mine_indices(height, width, len, indices.iter());
        log::debug!(
            "built {}x{} board with {} mines",
            height,
            width,
            board.mine_count
        );
        Ok(board)
    }

    /// Build a board with mines at the given `(row, col)` positions.
    pub fn with_mines(
        height: usize,
        width: usize,
        mines: &[(usize, usize)],
    ) -> Result<Self, ConfigError> {
        let len = check_mine_count(height, width, mines.len())?;
        let mut seen = vec![false; len];
        for &(row, col) in mines {
            if row >= height || col >= width {
                return Err(ConfigError::MineOutOfBounds { row, col });
            }
            let index = row * width + col;
            if seen[index] {
                return Err(ConfigError::DuplicateMine { row, col });
            }
            seen[index] = true;
        }
        Ok(Self::from_mine_indices(
            height,
            width,
            len,
            mines.iter().map(|&(row, col)| row * width + col),
        ))
    }

    fn from_mine_indices(
        height: usize,
        width: usize,
        len: usize,
        mines: impl Iterator<Item = usize>,
    ) -> Self {
        let mut board = Board {
            height,
            width,
            mine_count: 0,
            cells: vec![Cell::default(); len],
        };
        for index in mines {
            board.cells[index] = Cell::with_mine(true);
            board.mine_count += 1;
        }
        for index in 0..board.cells.len() {
            if !board.cells[index].is_mine() {
                continue;
            }
            let (row, col) = (index / width, index % width);
            for (dr, dc) in NEIGHBOURS {
                let (r, c) = (row as isize + dr, col as isize + dc);
                if board.is_valid_position(r, c) {
                    board.cells[r as usize * width + c as usize].add_adjacent_mine();
                }
            }
        }
        board
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Number of cells without a mine.
    pub fn safe_cell_count(&self) -> usize {
        self.cells.len() - self.mine_count
    }

    /// Returns `true` iff `0 <= row < height` and `0 <= col < width`.
    pub fn is_valid_position(&self, row: isize, col: isize) -> bool {
        (0..self.height as isize).contains(&row) && (0..self.width as isize).contains(&col)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// All cells in row-major order together with their `(row, col)`.
    pub fn enumerate(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / width, i % width), cell))
    }

    /// Classify a click at `(row, col)`; `None` when out of bounds.
    pub fn click(&self, row: usize, col: usize) -> Option<ClickResult> {
        self.cell(row, col).map(Cell::click)
    }

    /// Mark the cell at `(row, col)` as revealed. Returns `false` when out of bounds.
    pub fn reveal(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i].reveal();
                true
            }
            None => false,
        }
    }

    /// Render the board as the player sees it, one line per row.
    pub fn render_hidden(&self) -> String {
        self.to_string()
    }

    /// Reveal every cell and render the result.
    pub fn reveal_all(&mut self) -> String {
        self.cells.iter_mut().for_each(Cell::reveal);
        self.render_hidden()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Returns the number of cells when `mine_count` leaves at least one of them free.
fn check_mine_count(height: usize, width: usize, mine_count: usize) -> Result<usize, ConfigError> {
    let cells = height
        .checked_mul(width)
        .ok_or(ConfigError::BoardTooLarge { height, width })?;
    if mine_count >= cells {
        return Err(ConfigError::TooManyMines {
            mines: mine_count,
            cells,
        });
    }
    Ok(cells)
}
