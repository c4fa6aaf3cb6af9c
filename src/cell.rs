//! A single grid position.

use crate::common::ClickResult;

/// One cell of the board. Owned by [`crate::Board`]; never shared outside a
/// single operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    mine: bool,
    revealed: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub(crate) fn with_mine(mine: bool) -> Self {
        Cell {
            mine,
            ..Cell::default()
        }
    }

    /// Returns `true` if this cell holds a mine.
    pub fn is_mine(&self) -> bool {
        self.mine
    }

    /// Returns `true` once the cell has been revealed.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Number of mines among the up to eight neighbours.
    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub(crate) fn add_adjacent_mine(&mut self) {
        self.adjacent_mines += 1;
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Classify a click on this cell without changing it.
    pub fn click(&self) -> ClickResult {
        if self.revealed {
            ClickResult::AlreadyClicked
        } else if self.mine {
            ClickResult::Mine
        } else {
            ClickResult::Safe
        }
    }

    /// Character shown for this cell: `@` hidden, `M` mine, else the count.
    pub fn symbol(&self) -> char {
        if !self.revealed {
            '@'
        } else if self.mine {
            'M'
        } else {
            char::from(b'0' + self.adjacent_mines)
        }
    }
}
